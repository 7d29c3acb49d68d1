use proc_macro2::TokenStream;
use quote::quote;

use crate::name::{ElementType, PackageName};

/// Type-namespace names the skeleton defines or uses as generic
/// parameters. An element type with one of these names would be shadowed
/// inside the generated module.
pub(crate) const GENERATED_TYPE_NAMES: &[&str] = &[
    "Producer",
    "Repeat",
    "Lift",
    "Sequence",
    "State",
    "IntoIter",
    "MapProducer",
    "FilterProducer",
    "TakeProducer",
    "DropProducer",
    "ChainProducer",
    "T",
    "F",
    "P",
];

/// Render the module source for `element`.
///
/// The skeleton is the same for every element type; only the type is
/// substituted. The output is deterministic, so rendering twice gives the
/// same text.
pub fn render(element: &ElementType, package: &PackageName) -> String {
    let items = skeleton(element);
    let count = items.len();
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: items.into_iter().map(|item| syn::parse_quote!(#item)).collect(),
    };
    let mut out = header(element, package);
    out.push('\n');
    out.push_str(&prettyplease::unparse(&file));
    tracing::debug!(%element, %package, items = count, "rendered sequence module");
    out
}

fn header(element: &ElementType, package: &PackageName) -> String {
    format!(
        "// Code generated by fseq-gen. DO NOT EDIT.\n\
         // element type: {element}\n\
         // package: {package}\n\
         //\n\
         // Declare this file as a module (`mod {package};`). It imports the\n\
         // parent module so that the element type resolves. The element type\n\
         // appears in public signatures, so it must be at least `pub(crate)`.\n"
    )
}

/// The items of the generated module, in output order.
///
/// A consumer rarely uses every item, so all but the import carry
/// `allow(dead_code)`; an inner attribute would not survive `include!`.
fn skeleton(element: &ElementType) -> Vec<TokenStream> {
    let mut items = vec![quote! {
        #[allow(unused_imports)]
        use super::*;
    }];
    items.extend(body(element).into_iter().map(|item| {
        quote! {
            #[allow(dead_code)]
            #item
        }
    }));
    items
}

fn body(element: &ElementType) -> Vec<TokenStream> {
    let ty = element.ident();
    vec![
        quote! {
            /// The element type this module is specialized to.
            pub type T = #ty;
        },
        quote! {
            /// The pull contract underneath every sequence: produce the next
            /// element, or `None` once there are no more.
            pub trait Producer {
                /// Produce the next element, or `None` when exhausted.
                fn produce(&mut self) -> ::core::option::Option<#ty>;
            }
        },
        quote! {
            impl<F> Producer for F
            where
                F: ::core::ops::FnMut() -> ::core::option::Option<#ty>,
            {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    self()
                }
            }
        },
        quote! {
            /// An infinite producer yielding clones of one value.
            pub struct Repeat {
                value: #ty,
            }
        },
        quote! {
            /// Create a producer that yields `value` forever. Bound it with
            /// `take` before consuming it.
            pub fn repeat(value: #ty) -> Repeat {
                Repeat { value }
            }
        },
        quote! {
            impl Producer for Repeat {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    ::core::option::Option::Some(::core::clone::Clone::clone(&self.value))
                }
            }
        },
        quote! {
            struct Lift<'a> {
                items: &'a [#ty],
                index: usize,
            }
        },
        quote! {
            impl Producer for Lift<'_> {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    let item = ::core::clone::Clone::clone(self.items.get(self.index)?);
                    self.index += 1;
                    ::core::option::Option::Some(item)
                }
            }
        },
        quote! {
            /// A lazily evaluated, possibly infinite, single-pass stream of
            /// elements. Nothing is computed until something pulls.
            pub struct Sequence<'a> {
                state: State<'a>,
            }
        },
        quote! {
            enum State<'a> {
                Active(::std::boxed::Box<dyn Producer + 'a>),
                Exhausted,
            }
        },
        quote! {
            impl<'a> Sequence<'a> {
                /// Wrap a producer into a sequence.
                pub fn new(producer: impl Producer + 'a) -> Self {
                    Sequence {
                        state: State::Active(::std::boxed::Box::new(producer)),
                    }
                }

                /// A sequence over the elements of `items`, in order. `items`
                /// is only borrowed; lift it again to traverse it again.
                pub fn lift(items: &'a [#ty]) -> Self {
                    Self::new(Lift { items, index: 0 })
                }

                /// Pull the next element, or `None` if the sequence is
                /// exhausted. Once exhausted, it stays exhausted.
                pub fn pull(&mut self) -> ::core::option::Option<#ty> {
                    let State::Active(producer) = &mut self.state else {
                        return ::core::option::Option::None;
                    };
                    let next = producer.produce();
                    if next.is_none() {
                        self.state = State::Exhausted;
                    }
                    next
                }

                /// Whether a pull has already reported exhaustion.
                pub fn is_exhausted(&self) -> bool {
                    ::core::matches!(self.state, State::Exhausted)
                }

                /// Apply `f` to each element as it is pulled.
                pub fn map(self, f: impl ::core::ops::FnMut(#ty) -> #ty + 'a) -> Self {
                    Self::new(MapProducer { upstream: self, f })
                }

                /// Keep only the elements for which `predicate` holds.
                pub fn filter(self, predicate: impl ::core::ops::FnMut(&#ty) -> bool + 'a) -> Self {
                    Self::new(FilterProducer { upstream: self, predicate, keep: true })
                }

                /// Keep only the elements for which `predicate` does not hold.
                pub fn exclude(self, predicate: impl ::core::ops::FnMut(&#ty) -> bool + 'a) -> Self {
                    Self::new(FilterProducer { upstream: self, predicate, keep: false })
                }

                /// Yield at most the first `n` elements, never pulling more
                /// than `n` from upstream.
                pub fn take(self, n: usize) -> Self {
                    Self::new(TakeProducer { upstream: self, remaining: n })
                }

                /// Discard the first `n` elements on first demand, then yield
                /// the rest.
                pub fn drop(self, n: usize) -> Self {
                    Self::new(DropProducer { upstream: self, pending: n })
                }

                /// Yield every element of `self`, then every element of
                /// `other`. `other` is not pulled before `self` is exhausted.
                pub fn chain(self, other: Sequence<'a>) -> Self {
                    Self::new(ChainProducer { first: self, second: other })
                }

                /// Pull until exhaustion, returning the elements in order.
                /// Does not return if the sequence is infinite.
                pub fn collect(self) -> ::std::vec::Vec<#ty> {
                    ::core::iter::Iterator::collect(::core::iter::IntoIterator::into_iter(self))
                }

                /// Left fold with `f(accumulator, element)`, starting from
                /// `seed`. Does not return if the sequence is infinite.
                pub fn fold(self, seed: #ty, f: impl ::core::ops::FnMut(#ty, #ty) -> #ty) -> #ty {
                    ::core::iter::Iterator::fold(::core::iter::IntoIterator::into_iter(self), seed, f)
                }
            }
        },
        quote! {
            impl<'a> ::core::iter::IntoIterator for Sequence<'a> {
                type Item = #ty;
                type IntoIter = IntoIter<'a>;

                fn into_iter(self) -> IntoIter<'a> {
                    IntoIter { sequence: self }
                }
            }
        },
        quote! {
            impl ::core::fmt::Debug for Sequence<'_> {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    let state = match self.state {
                        State::Active(_) => "Active",
                        State::Exhausted => "Exhausted",
                    };
                    f.debug_tuple("Sequence").field(&::core::format_args!("{}", state)).finish()
                }
            }
        },
        quote! {
            /// An iterator that pulls from a `Sequence`. It is fused.
            pub struct IntoIter<'a> {
                sequence: Sequence<'a>,
            }
        },
        quote! {
            impl ::core::iter::Iterator for IntoIter<'_> {
                type Item = #ty;

                fn next(&mut self) -> ::core::option::Option<#ty> {
                    self.sequence.pull()
                }
            }
        },
        quote! {
            impl ::core::iter::FusedIterator for IntoIter<'_> {}
        },
        quote! {
            struct MapProducer<'a, F> {
                upstream: Sequence<'a>,
                f: F,
            }
        },
        quote! {
            impl<F> Producer for MapProducer<'_, F>
            where
                F: ::core::ops::FnMut(#ty) -> #ty,
            {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    let item = self.upstream.pull()?;
                    ::core::option::Option::Some((self.f)(item))
                }
            }
        },
        quote! {
            struct FilterProducer<'a, P> {
                upstream: Sequence<'a>,
                predicate: P,
                keep: bool,
            }
        },
        quote! {
            impl<P> Producer for FilterProducer<'_, P>
            where
                P: ::core::ops::FnMut(&#ty) -> bool,
            {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    loop {
                        let item = self.upstream.pull()?;
                        if (self.predicate)(&item) == self.keep {
                            return ::core::option::Option::Some(item);
                        }
                    }
                }
            }
        },
        quote! {
            struct TakeProducer<'a> {
                upstream: Sequence<'a>,
                remaining: usize,
            }
        },
        quote! {
            impl Producer for TakeProducer<'_> {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    if self.remaining == 0 {
                        return ::core::option::Option::None;
                    }
                    self.remaining -= 1;
                    self.upstream.pull()
                }
            }
        },
        quote! {
            struct DropProducer<'a> {
                upstream: Sequence<'a>,
                pending: usize,
            }
        },
        quote! {
            impl Producer for DropProducer<'_> {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    while self.pending > 0 {
                        self.pending -= 1;
                        self.upstream.pull()?;
                    }
                    self.upstream.pull()
                }
            }
        },
        quote! {
            struct ChainProducer<'a> {
                first: Sequence<'a>,
                second: Sequence<'a>,
            }
        },
        quote! {
            impl Producer for ChainProducer<'_> {
                fn produce(&mut self) -> ::core::option::Option<#ty> {
                    match self.first.pull() {
                        ::core::option::Option::Some(item) => ::core::option::Option::Some(item),
                        ::core::option::Option::None => self.second.pull(),
                    }
                }
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_for(element: &str) -> String {
        let element = ElementType::new(element).unwrap();
        let package = element.default_package().unwrap();
        render(&element, &package)
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_for("String"), render_for("String"));
    }

    #[test]
    fn test_render_parses_as_rust() {
        for element in ["String", "i64", "Point"] {
            let source = render_for(element);
            let file = syn::parse_file(&source).unwrap();
            assert_eq!(file.items.len(), skeleton(&ElementType::new(element).unwrap()).len());
        }
    }

    #[test]
    fn test_render_only_substitutes_type() {
        // neither name occurs in the skeleton itself
        // equal lengths keep the formatter's line breaks identical
        let alpha = render_for("Alpha");
        let gamma = render_for("Gamma");
        assert_ne!(alpha, gamma);
        assert_eq!(alpha.replace("Alpha", "Gamma").replace("falpha", "fgamma"), gamma);
    }

    #[test]
    fn test_header() {
        let source = render_for("String");
        let mut lines = source.lines();
        assert_eq!(
            lines.next(),
            Some("// Code generated by fseq-gen. DO NOT EDIT.")
        );
        assert_eq!(lines.next(), Some("// element type: String"));
        assert_eq!(lines.next(), Some("// package: fstring"));
    }

    #[test]
    fn test_render_exports_element_alias() {
        let file = syn::parse_file(&render_for("Point")).unwrap();
        let alias = file.items.iter().find_map(|item| match item {
            syn::Item::Type(alias) if alias.ident == "T" => Some(alias),
            _ => None,
        });
        let alias = alias.unwrap();
        assert!(matches!(alias.vis, syn::Visibility::Public(_)));
        let syn::Type::Path(path) = &*alias.ty else {
            panic!("alias is not a path");
        };
        assert!(path.path.is_ident("Point"));
    }

    #[test]
    fn test_render_allows_dead_code() {
        // a private `mod` that uses a single operation must build warning-free
        let file = syn::parse_file(&render_for("String")).unwrap();
        for item in &file.items[1..] {
            let source = quote!(#item).to_string();
            assert!(
                source.contains("# [allow (dead_code)]"),
                "missing allow on: {source}"
            );
        }
    }

    #[test]
    fn test_render_is_formatted() {
        let source = render_for("String");
        assert!(source.contains("\npub trait Producer {\n"));
        assert!(source.contains("/// The pull contract underneath every sequence"));
        assert!(!source.contains(":: core ::"));
    }

    #[test]
    fn test_header_names_visibility() {
        assert!(render_for("String").contains("at least `pub(crate)`"));
    }

    #[test]
    fn test_render_has_no_inner_attributes() {
        // the file must stay includable with `include!`
        assert!(!render_for("String").contains("#!"));
    }
}
