use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Type};

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "Entity can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "Entity can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let marked: Vec<&Field> = fields
        .iter()
        .filter(|field| has_primary_key_attr(field))
        .collect();

    let pk_field = match marked.as_slice() {
        [field] => *field,
        [] => {
            let named_id = fields
                .iter()
                .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "id"));

            match named_id {
                Some(field) => field,
                None => {
                    let err = Error::new_spanned(
                        &input.ident,
                        "Entity requires #[entity(primary_key)] on a field or a field named `id`",
                    );
                    return err.to_compile_error();
                }
            }
        }
        [_, second, ..] => {
            let err =
                Error::new_spanned(second, "#[entity(primary_key)] may only mark one field");
            return err.to_compile_error();
        }
    };

    let pk_ident = pk_field.ident.as_ref().expect("named field");
    let pk_name = pk_ident.to_string();

    // optional keys surface as None, everything else wraps in Some
    let key_expr = if is_path_ident(&pk_field.ty, "Option") {
        quote! {
            self.#pk_ident.clone().map(::siftq::value::Value::from)
        }
    } else {
        quote! {
            ::core::option::Option::Some(::siftq::value::Value::from(self.#pk_ident.clone()))
        }
    };

    quote! {
        impl #impl_generics ::siftq::entity::EntityIdentity for #ident #ty_generics #where_clause {
            const PRIMARY_KEY: &'static str = #pk_name;

            fn primary_key(&self) -> ::core::option::Option<::siftq::value::Value> {
                #key_expr
            }
        }
    }
}

fn has_primary_key_attr(field: &Field) -> bool {
    field.attrs.iter().any(|attr| {
        if !attr.path().is_ident("entity") {
            return false;
        }

        let mut found = false;
        // anything else inside entity(...) is ignored
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("primary_key") {
                found = true;
            }

            Ok(())
        });

        found
    })
}

fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}

///
/// TESTS
///
