//! h256only Macros
//!
//! This crate provides the `#[claims]` attribute macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Path, parse_macro_input};

/// Turns a struct into a claims type carrying the registered claims.
///
/// Appends a flattened field holding the registered claims:
///
/// ```ignore
/// #[serde(flatten)]
/// pub standard: h256only::StandardClaims,
/// ```
///
/// which adds `aud`, `exp`, `jti`, `iat`, `iss`, `nbf` and `sub` to the JSON
/// after your own fields. Derives `Debug`, `Clone`, `PartialEq`, `Serialize`
/// and `Deserialize`, and implements `h256only::Claims` by validating the
/// registered claims.
///
/// Extra checks go in a function named with `validate`, run after the
/// registered claims pass:
///
/// ```ignore
/// #[claims(validate = check_role)]
/// struct Session {
///     pub role: String,
/// }
///
/// fn check_role(session: &Session, _now: i64) -> h256only::Result<()> {
///     if session.role.is_empty() {
///         return Err(h256only::Error::InvalidClaim("empty role".into()));
///     }
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn claims(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut validate: Option<Path> = None;
    let args_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("validate") {
            validate = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported #[claims] argument, expected `validate = path`"))
        }
    });
    parse_macro_input!(args with args_parser);

    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let vis = &input.vis;
    let attrs = &input.attrs;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let generics = &input.generics;

    // Extract existing fields if it's a struct
    let existing_fields = if let syn::Data::Struct(syn::DataStruct {
        fields: syn::Fields::Named(fields),
        ..
    }) = &input.data
    {
        fields.named.iter()
    } else {
        return syn::Error::new_spanned(
            struct_name,
            "#[claims] can only be applied to structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let custom_validation = validate.map(|path| {
        quote! {
            #path(self, now)?;
        }
    });

    // Own fields first, so they serialize ahead of the registered claims
    let expanded = quote! {
        #(#attrs)*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            ::h256only::__private::serde::Serialize,
            ::h256only::__private::serde::Deserialize
        )]
        #[serde(crate = "::h256only::__private::serde")]
        #vis struct #struct_name #generics #where_clause {
            #(#existing_fields,)*

            #[serde(flatten)]
            pub standard: ::h256only::StandardClaims,
        }

        impl #impl_generics ::h256only::Claims for #struct_name #ty_generics #where_clause {
            fn valid(&self, now: i64) -> ::h256only::Result<()> {
                ::h256only::Claims::valid(&self.standard, now)?;
                #custom_validation
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
