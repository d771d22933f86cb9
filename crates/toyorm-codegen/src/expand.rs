mod model;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for toyorm types
    toyorm: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let register_impl = self.expand_register_impl();
        let model_impl = self.expand_model_impl();

        wrap_in_const(quote! {
            #register_impl
            #model_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        toyorm: quote!(_toyorm::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use toyorm as _toyorm;
            #code
        };
    }
}
