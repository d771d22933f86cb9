use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_register_impl(&self) -> TokenStream {
        let toyorm = &self.toyorm;
        let model_ident = &self.model.ident;
        let model_name = &self.model.name;

        let fields = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.ty;

            quote! {
                .primitive::<#ty>(#name)
            }
        });

        quote! {
            impl #toyorm::Register for #model_ident {
                fn schema() -> #toyorm::ModelSchema {
                    #toyorm::ModelSchema::new(#model_name)
                        #( #fields )*
                }
            }
        }
    }
}
