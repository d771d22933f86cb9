use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let toyorm = &self.toyorm;
        let model_ident = &self.model.ident;

        let get_arms = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let name = &field.name;
            let ty = &field.ty;

            quote! {
                #name => #toyorm::Result::Ok(<#ty as #toyorm::Primitive>::to_value(&self.#ident)),
            }
        });

        let set_arms = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let name = &field.name;
            let ty = &field.ty;

            quote! {
                #name => {
                    self.#ident = <#ty as #toyorm::Primitive>::load(value)?;
                    #toyorm::Result::Ok(())
                }
            }
        });

        quote! {
            impl #toyorm::Model for #model_ident {
                fn field_value(&self, field: &str) -> #toyorm::Result<#toyorm::Value> {
                    match field {
                        #( #get_arms )*
                        _ => #toyorm::Result::Err(#toyorm::Error::unknown_column(field)),
                    }
                }

                fn set_field(&mut self, field: &str, value: #toyorm::Value) -> #toyorm::Result<()> {
                    match field {
                        #( #set_arms )*
                        _ => {
                            let _ = value;
                            #toyorm::Result::Err(#toyorm::Error::unknown_column(field))
                        }
                    }
                }
            }
        }
    }
}
