mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `stepcas-error` for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use stepcas_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "cannot divide by zero", labels = ["this expression"])]
/// pub struct DivisionByZero;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error, and by its `Display` impl.    |
/// | `labels`    | The texts of the labels pointing to each span of the error, in span order.   |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `labels` defaults to a single unlabeled highlight over the first span.
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the members of the struct in scope (tuple structs are not supported).
///
/// The generated code refers to the `ariadne` and `stepcas_error` crates by name, so both must be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl stepcas_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
