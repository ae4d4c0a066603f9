use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;
mod parse;

/// Declares error kinds known at compile time, one struct per spec.
///
/// Each entry is a name made of ASCII letters, optionally followed by a braced
/// list of `message` and `code` fields. `message` is either a string literal
/// (the default, overridable through `with_message`) or a closure with typed
/// parameters, which becomes the argument list of `new`.
///
/// The input is validated the same way `erray::build` validates a runtime spec
/// list; violations are reported as compile errors at the offending token.
///
/// # Example
///
/// ```ignore
/// erray::errors! {
///     pub InvalidX,
///     pub InvalidY { message: "Invalid Y value for this function", code: 500 },
///     pub InvalidXY {
///         message: |x: i32, y: i32| format!("Invalid values x: {x} and y: {y} for input."),
///     },
///     pub NotFound { code: 404 },
/// }
///
/// let err = InvalidXY::new(1, 2);
/// assert_eq!(err.to_string(), "InvalidXY: Invalid values x: 1 and y: 2 for input.");
/// ```
#[proc_macro]
pub fn errors(input: TokenStream) -> TokenStream {
    let list = parse_macro_input!(input as parse::ErrorList);
    TokenStream::from(expand::expand(&list))
}
