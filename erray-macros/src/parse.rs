//! Parsing and validation of `errors!` input.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, token, Attribute, Expr, ExprClosure, Ident, Lit, LitStr, Pat, Token, Type, UnOp, Visibility};

pub struct ErrorList {
    pub specs: Vec<SpecDef>,
}

pub struct SpecDef {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub message: Option<MessageDef>,
    pub code: Option<i64>,
}

pub enum MessageDef {
    Static(LitStr),
    Computed {
        closure: ExprClosure,
        params: Vec<(Ident, Type)>,
    },
}

struct FieldDef {
    key: Ident,
    value: Expr,
}

impl Parse for FieldDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let value: Expr = input.parse()?;
        Ok(Self { key, value })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

impl Parse for ErrorList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let specs = Punctuated::<SpecDef, Token![,]>::parse_terminated(input)?;
        if specs.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "errors! expects at least one error spec",
            ));
        }

        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.to_string()) {
                return Err(syn::Error::new(
                    spec.name.span(),
                    format!("duplicate error name `{}`", spec.name),
                ));
            }
        }

        Ok(Self {
            specs: specs.into_iter().collect(),
        })
    }
}

impl Parse for SpecDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;
        if !is_valid_name(&name.to_string()) {
            return Err(syn::Error::new(
                name.span(),
                format!("error name `{name}` must contain only ASCII letters"),
            ));
        }

        let mut spec = SpecDef {
            attrs,
            vis,
            name,
            message: None,
            code: None,
        };
        if !input.peek(token::Brace) {
            return Ok(spec);
        }

        let content;
        braced!(content in input);
        let fields = Punctuated::<FieldDef, Token![,]>::parse_terminated(&content)?;
        let mut seen = HashSet::new();
        for field in fields {
            let key = field.key.to_string();
            if !seen.insert(key.clone()) {
                return Err(syn::Error::new(
                    field.key.span(),
                    format!("field `{key}` is given more than once"),
                ));
            }
            match key.as_str() {
                "message" => spec.message = Some(parse_message(field.value)?),
                "code" => spec.code = Some(parse_code(&field.value)?),
                _ => {
                    return Err(syn::Error::new(
                        field.key.span(),
                        format!("unknown field `{key}`, expected `message` or `code`"),
                    ))
                }
            }
        }
        Ok(spec)
    }
}

fn parse_message(value: Expr) -> syn::Result<MessageDef> {
    match value {
        Expr::Lit(lit) => match lit.lit {
            Lit::Str(s) => Ok(MessageDef::Static(s)),
            other => Err(syn::Error::new_spanned(
                other,
                "`message` expects a string literal or a closure",
            )),
        },
        Expr::Closure(closure) => {
            let params = closure
                .inputs
                .iter()
                .map(|pat| match pat {
                    Pat::Type(typed) => match &*typed.pat {
                        Pat::Ident(ident) => Ok((ident.ident.clone(), (*typed.ty).clone())),
                        other => Err(syn::Error::new_spanned(
                            other,
                            "message function parameters must be plain identifiers",
                        )),
                    },
                    other => Err(syn::Error::new_spanned(
                        other,
                        "message function parameters need a type, e.g. `|x: i32|`",
                    )),
                })
                .collect::<syn::Result<Vec<_>>>()?;
            Ok(MessageDef::Computed { closure, params })
        }
        other => Err(syn::Error::new_spanned(
            other,
            "`message` expects a string literal or a closure",
        )),
    }
}

fn parse_code(value: &Expr) -> syn::Result<i64> {
    let (lit, negative) = match value {
        Expr::Lit(lit) => (&lit.lit, false),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => match &*unary.expr {
            Expr::Lit(lit) => (&lit.lit, true),
            _ => return Err(syn::Error::new_spanned(value, "`code` expects an integer literal")),
        },
        _ => return Err(syn::Error::new_spanned(value, "`code` expects an integer literal")),
    };
    let Lit::Int(int) = lit else {
        return Err(syn::Error::new_spanned(value, "`code` expects an integer literal"));
    };
    let code: i64 = int.base10_parse()?;
    Ok(if negative { -code } else { code })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_err(tokens: proc_macro2::TokenStream) -> String {
        match syn::parse2::<ErrorList>(tokens) {
            Ok(_) => panic!("expected a parse error"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn parses_all_spec_shapes() {
        let list: ErrorList = syn::parse2(quote! {
            InvalidX,
            /// Documented.
            pub InvalidY { message: "Invalid Y value", code: 500 },
            pub(crate) InvalidXY { message: |x: i32, y: i32| format!("{x} {y}") },
            NotFound { code: 404 },
        })
        .expect("valid input");

        assert_eq!(list.specs.len(), 4);
        assert!(list.specs[0].message.is_none());
        assert_eq!(list.specs[1].attrs.len(), 1);
        assert_eq!(list.specs[1].code, Some(500));
        let Some(MessageDef::Computed { params, .. }) = &list.specs[2].message else {
            panic!("expected message function");
        };
        let names: Vec<_> = params.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(list.specs[3].code, Some(404));
    }

    #[test]
    fn negative_and_zero_codes() {
        let list: ErrorList = syn::parse2(quote! { A { code: -1 }, B { code: 0 } }).expect("valid input");
        assert_eq!(list.specs[0].code, Some(-1));
        assert_eq!(list.specs[1].code, Some(0));
    }

    #[test]
    fn rejects_empty_list() {
        assert!(parse_err(quote! {}).contains("at least one"));
    }

    #[test]
    fn rejects_duplicate_names() {
        assert!(parse_err(quote! { Name, Name }).contains("duplicate error name `Name`"));
    }

    #[test]
    fn rejects_non_alphabetic_names() {
        assert!(parse_err(quote! { Http404 }).contains("only ASCII letters"));
        assert!(parse_err(quote! { Not_Found }).contains("only ASCII letters"));
    }

    #[test]
    fn rejects_bad_field_values() {
        assert!(parse_err(quote! { X { code: "404" } }).contains("integer literal"));
        assert!(parse_err(quote! { X { message: 5 } }).contains("string literal or a closure"));
        assert!(parse_err(quote! { X { message: |x| x } }).contains("need a type"));
        assert!(parse_err(quote! { X { colour: "red" } }).contains("unknown field"));
        assert!(parse_err(quote! { X { code: 1, code: 2 } }).contains("more than once"));
    }
}
