use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// The struct field's identifier
    pub(crate) ident: syn::Ident,

    /// Logical field name, the identifier without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        if let syn::Type::Reference(ty) = &field.ty {
            return Err(syn::Error::new_spanned(
                ty,
                "model fields must own their data",
            ));
        }

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
        })
    }
}
