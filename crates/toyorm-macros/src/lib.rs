extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `toyorm::Model` and `toyorm::Register` for a struct with named
/// fields.
///
/// The table name is the snake cased struct name and each field maps to the
/// snake cased column of the same name. Every field type must implement
/// `toyorm::Primitive`; `Option<T>` fields are nullable.
#[proc_macro_derive(Model)]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match toyorm_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
