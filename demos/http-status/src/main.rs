use std::error::Error;

use erray::{ErrorRegistry, ErrorSpec, StaticKind, Value};
use tracing_subscriber::EnvFilter;

erray::errors! {
    /// Request body failed validation.
    BadRequest { message: "The request could not be understood", code: 400 },
    NotFound { message: |path: &str| format!("No route for {path}"), code: 404 },
    Teapot { code: 418 },
}

fn route(path: &str) -> Result<&'static str, Box<dyn Error + Send + Sync>> {
    match path {
        "/" => Ok("index"),
        "/coffee" => Err(Box::new(Teapot::new())),
        p if p.contains(' ') => Err(Box::new(BadRequest::new())),
        p => Err(Box::new(NotFound::new(p))),
    }
}

fn runtime_registry() -> erray::Result<ErrorRegistry> {
    erray::build(vec![
        Value::from("Unavailable"),
        ErrorSpec::new("RateLimited")
            .message_fn(|args| match args.first() {
                Some(secs) => format!("Retry after {secs} seconds"),
                None => "Retry later".to_string(),
            })
            .code(429)
            .into(),
    ])
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for path in ["/", "/coffee", "/bad path", "/missing"] {
        match route(path) {
            Ok(page) => println!("{path} -> {page}"),
            Err(err) => {
                let code = if err.downcast_ref::<Teapot>().is_some() {
                    Teapot::CODE
                } else if err.downcast_ref::<BadRequest>().is_some() {
                    BadRequest::CODE
                } else {
                    NotFound::CODE
                };
                println!("{path} -> {} ({err})", code.unwrap_or(500));
            }
        }
    }

    let registry = runtime_registry()?;
    let err = registry["RateLimited"].with_args([30]);
    if let Some(kind) = registry.classify(&err) {
        println!("{} {:?}: {err}", kind.name(), kind.code());
    }

    for info in erray::catalog::kinds() {
        println!("declared {} (code {:?}) in {}", info.name, info.code, info.module);
    }

    Ok(())
}
