/// Creates a `db::Builder` with the given models registered.
#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = toyorm::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}
