use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// The struct's identifier
    pub(crate) ident: syn::Ident,

    /// Type name the table name is derived from
    pub(crate) name: String,

    /// Fields in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let fields = match &ast.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(fields) => &fields.named,
                syn::Fields::Unnamed(_) => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "tuple structs cannot be models; use named fields",
                    ))
                }
                syn::Fields::Unit => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "unit structs cannot be models; declare at least one field",
                    ))
                }
            },
            syn::Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "only structs can derive `Model`",
                ))
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "only structs can derive `Model`",
                ))
            }
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "generic models are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut model_fields = vec![];

        for field in fields {
            match Field::from_ast(field) {
                Ok(field) => model_fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            name: ast.ident.to_string(),
            fields: model_fields,
        })
    }
}
