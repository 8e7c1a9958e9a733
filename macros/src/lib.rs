use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    if field_names.iter().any(Option::is_none) {
        return quote! {
            compile_error!("Models must use named fields.")
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Labels shown to users, e.g. `red` becomes "Red".
    let labels = field_names
        .iter()
        .flatten()
        .map(|ident| ident.to_string().to_case(Case::Title))
        .collect::<Vec<_>>();

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // TODO: Check if the derives are already there.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Display names of the three components, in declaration order.
            pub const COMPONENT_NAMES: [&'static str; 3] = [#(#labels),*];

            /// Create a new color in this model.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
