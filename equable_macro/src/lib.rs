//! Companion macro crate for `equable`. Use the re-exports from that crate
//! rather than depending on this one directly.

extern crate proc_macro;

use proc_macro::TokenStream;

/// Grants the `==`/`!=` operators to a subject type, defined by its
/// canonical `equals` method.
///
/// Emits only `PartialEq::eq`, delegating to
/// `equable::EqualityComparable::equals`; `ne` is left to the default
/// negation so the operators cannot diverge.
///
/// For a non-generic subject the contract is asserted unconditionally: the
/// build fails if the type lacks `equals`, whether or not any comparison is
/// written. For a generic subject the grant carries a `where` predicate
/// requiring the instantiated type to be `EqualityComparable`, so the
/// contract is checked at each instantiation instead.
///
/// ```ignore
/// use equable::{Equality, EqualityComparable};
///
/// #[derive(Equality)]
/// struct Holder<T> {
///     inner: T,
/// }
///
/// impl<T: PartialEq> EqualityComparable for Holder<T> {
///     fn equals(&self, other: &Self) -> bool {
///         self.inner == other.inner
///     }
/// }
/// ```
#[proc_macro_derive(Equality)]
pub fn derive_equality(ts: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(ts as syn::DeriveInput);

    if let syn::Data::Union(_) = &input.data {
        panic!("#[derive(Equality)] cannot apply to a union")
    }

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let (_, ty_generics, _) = input.generics.split_for_impl();
        let predicate: syn::WherePredicate =
            syn::parse_quote!(#ident #ty_generics: ::equable::EqualityComparable);
        generics.make_where_clause().predicates.push(predicate);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let contract = if input.generics.params.is_empty() {
        quote::quote! {
            const _: () = {
                const fn __equable_contract<T: ::equable::EqualityComparable + ?Sized>() {}
                __equable_contract::<#ident>()
            };
        }
    } else {
        quote::quote! {}
    };

    Into::into(quote::quote! {
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::equable::EqualityComparable::equals(self, other)
            }
        }

        #contract
    })
}
