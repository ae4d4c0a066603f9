use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{ErrorList, MessageDef, SpecDef};

pub fn expand(list: &ErrorList) -> TokenStream {
    list.specs.iter().map(expand_spec).collect()
}

fn expand_spec(spec: &SpecDef) -> TokenStream {
    let SpecDef {
        attrs,
        vis,
        name,
        message,
        code,
    } = spec;
    let name_str = name.to_string();
    let line = name.span().start().line as u32;

    let code_tokens = match code {
        Some(code) => quote! { ::std::option::Option::Some(#code) },
        None => quote! { ::std::option::Option::None },
    };
    let (default_message, initial_message) = match message {
        Some(MessageDef::Static(lit)) => (
            quote! { ::std::option::Option::Some(#lit) },
            quote! { ::std::option::Option::Some(::std::string::String::from(#lit)) },
        ),
        _ => (
            quote! { ::std::option::Option::None },
            quote! { ::std::option::Option::None },
        ),
    };

    let constructors = match message {
        Some(MessageDef::Computed { closure, params }) => {
            let idents: Vec<_> = params.iter().map(|(ident, _)| ident).collect();
            let types: Vec<_> = params.iter().map(|(_, ty)| ty).collect();
            quote! {
                /// Construct the error, computing its message from the arguments.
                #[allow(clippy::redundant_closure_call)]
                pub fn new(#(#idents: #types),*) -> Self {
                    let message: ::std::string::String = ::std::convert::Into::into((#closure)(#(#idents),*));
                    Self {
                        message: ::std::option::Option::Some(message),
                        backtrace: ::std::backtrace::Backtrace::capture(),
                    }
                }
            }
        }
        _ => quote! {
            /// Construct the error with its default message.
            pub fn new() -> Self {
                Self {
                    message: #initial_message,
                    backtrace: ::std::backtrace::Backtrace::capture(),
                }
            }

            /// Construct the error, overriding the default message.
            pub fn with_message(message: impl ::std::convert::Into<::std::string::String>) -> Self {
                Self {
                    message: ::std::option::Option::Some(message.into()),
                    backtrace: ::std::backtrace::Backtrace::capture(),
                }
            }
        },
    };

    let default_impl = match message {
        Some(MessageDef::Computed { .. }) => quote! {},
        _ => quote! {
            impl ::std::default::Default for #name {
                fn default() -> Self {
                    Self::new()
                }
            }
        },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #name {
            message: ::std::option::Option<::std::string::String>,
            backtrace: ::std::backtrace::Backtrace,
        }

        impl #name {
            #constructors
        }

        #default_impl

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::erray::__private::fmt_error(f, #name_str, self.message.as_deref())
            }
        }

        impl ::std::error::Error for #name {}

        impl ::erray::StaticKind for #name {
            const NAME: &'static str = #name_str;
            const CODE: ::std::option::Option<i64> = #code_tokens;

            fn message(&self) -> ::std::option::Option<&str> {
                self.message.as_deref()
            }

            fn backtrace(&self) -> &::std::backtrace::Backtrace {
                &self.backtrace
            }
        }

        ::erray::inventory::submit!(::erray::catalog::KindInfo {
            name: #name_str,
            code: #code_tokens,
            default_message: #default_message,
            module: ::std::module_path!(),
            line: #line,
        });
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_str(tokens: TokenStream) -> String {
        let list: ErrorList = syn::parse2(tokens).expect("valid input");
        expand(&list).to_string()
    }

    #[test]
    fn static_kind_gets_override_constructor() {
        let out = expand_str(quote! { InvalidY { message: "Invalid Y", code: 500 } });
        assert!(out.contains("struct InvalidY"));
        assert!(out.contains("fn with_message"));
        assert!(out.contains("Some (500i64)"), "{out}");
        assert!(out.contains("impl :: std :: default :: Default for InvalidY"));
    }

    #[test]
    fn computed_kind_takes_closure_arguments() {
        let out = expand_str(quote! {
            InvalidXY { message: |x: i32, y: i32| format!("{x} {y}") }
        });
        assert!(out.contains("pub fn new (x : i32 , y : i32)"), "{out}");
        assert!(!out.contains("fn with_message"));
        assert!(!out.contains("Default for InvalidXY"));
    }

    #[test]
    fn every_kind_is_cataloged() {
        let out = expand_str(quote! { A, B { code: 1 } });
        assert_eq!(out.matches("inventory :: submit !").count(), 2);
    }
}
