//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            name,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Prisms cannot be derived for unions.").to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// The pieces that differ between variant shapes.
struct VariantShape {
    focus_type: TokenStream2,
    pattern: TokenStream2,
    extract: TokenStream2,
    review_input: TokenStream2,
    construct: TokenStream2,
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    match &variant.fields {
        Fields::Unit => VariantShape {
            focus_type: quote! { () },
            pattern: quote! { Self::#variant_name },
            extract: quote! { () },
            review_input: quote! { () },
            construct: quote! { Self::#variant_name },
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            VariantShape {
                focus_type: quote! { #field_type },
                pattern: quote! { Self::#variant_name(value) },
                extract: quote! { ::core::clone::Clone::clone(value) },
                review_input: quote! { value },
                construct: quote! { Self::#variant_name(value) },
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<_> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            VariantShape {
                focus_type: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                extract: quote! { (#(::core::clone::Clone::clone(#bindings)),*) },
                review_input: quote! { (#(#bindings),*) },
                construct: quote! { Self::#variant_name(#(#bindings),*) },
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<_> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();
            VariantShape {
                focus_type: quote! { (#(#field_types,)*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                extract: quote! { (#(::core::clone::Clone::clone(#field_names),)*) },
                review_input: quote! { (#(#field_names,)*) },
                construct: quote! { Self::#variant_name { #(#field_names),* } },
            }
        }
    }
}

/// Generates `{variant}_prism()` for one variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Returns a prism focusing on the `{variant_name}` variant.");
    let VariantShape {
        focus_type,
        pattern,
        extract,
        review_input,
        construct,
    } = variant_shape(variant);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::opticore::optics::Prism<Self, #focus_type> + Clone {
            ::opticore::optics::FunctionPrism::new(
                |source: &Self| match source {
                    #pattern => ::opticore::control::Maybe::Just(#extract),
                    #[allow(unreachable_patterns)]
                    _ => ::opticore::control::Maybe::Nothing,
                },
                |#review_input: #focus_type| #construct,
            )
        }
    }
}

/// Converts a `PascalCase` identifier to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
