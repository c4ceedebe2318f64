use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::*;

/// Turns an `unsafe extern "C"` block into a dynamically loaded function table.
///
/// ```ignore
/// #[dynamic_ffi(api = CurandApi, library = CurandLibrary, prefix = "curand")]
/// unsafe extern "C" {
///     pub fn curandGetVersion(version: *mut c_int) -> curandStatus_t;
/// }
/// ```
///
/// expands to:
/// - `trait CurandApi: Send + Sync` with one `unsafe fn get_version(&self, version: *mut c_int)`
///   per declared symbol, the symbol's prefix stripped and the rest snake cased.
/// - `struct CurandLibrary` holding the `libloading::Library` and one resolved function
///   pointer per symbol, with `from_library` resolving every symbol up front and `SYMBOLS`
///   listing the native names.
/// - a `#[cfg(test)]` `from_raw_symbols` constructor taking already resolved pointers, so
///   the forwarding can be tested without a shared library on disk.
/// - `impl CurandApi for CurandLibrary` where every method emits a `tracing::trace!` event
///   with the native name and calls the pointer with its arguments untouched.
#[proc_macro_attribute]
pub fn dynamic_ffi(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut api: Option<Ident> = None;
    let mut library: Option<Ident> = None;
    let mut prefix = String::new();
    let parser = meta::parser(|meta| {
        if meta.path.is_ident("api") {
            api = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("library") {
            library = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("prefix") {
            prefix = meta.value()?.parse::<LitStr>()?.value();
            Ok(())
        } else {
            Err(meta.error("unsupported dynamic_ffi property"))
        }
    });
    parse_macro_input!(attr with parser);

    let (Some(api), Some(library)) = (api, library) else {
        return Error::new(
            Span::call_site(),
            "dynamic_ffi requires both `api = ...` and `library = ...`",
        )
        .to_compile_error()
        .into();
    };

    let item = parse_macro_input!(item as ItemForeignMod);
    match expand(&item, &api, &library, &prefix) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(
    item: &ItemForeignMod,
    api: &Ident,
    library: &Ident,
    prefix: &str,
) -> Result<proc_macro2::TokenStream> {
    let mut trait_fns = Vec::new();
    let mut fields = Vec::new();
    let mut resolves = Vec::new();
    let mut raw_resolves = Vec::new();
    let mut field_names = Vec::new();
    let mut symbol_names = Vec::new();
    let mut forwards = Vec::new();

    for foreign in &item.items {
        let ForeignItem::Fn(func) = foreign else {
            return Err(Error::new_spanned(
                foreign,
                "only functions can be dynamically loaded",
            ));
        };
        let Signature {
            ident,
            inputs,
            output,
            variadic,
            ..
        } = &func.sig;
        if let Some(variadic) = variadic {
            return Err(Error::new_spanned(
                variadic,
                "variadic functions are not supported",
            ));
        }

        let symbol = ident.to_string();
        let method = format_ident!("{}", method_name(&symbol, prefix), span = ident.span());
        let symbol_bytes = LitByteStr::new(format!("{symbol}\0").as_bytes(), ident.span());
        let docs = func
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .collect::<Vec<_>>();

        let mut args = Punctuated::<Pat, Comma>::new();
        let mut tys = Punctuated::<Type, Comma>::new();
        for arg in inputs {
            match arg {
                FnArg::Typed(ty) => {
                    args.push((*ty.pat).clone());
                    tys.push((*ty.ty).clone());
                }
                FnArg::Receiver(r) => {
                    return Err(Error::new_spanned(r, "foreign functions take no receiver"));
                }
            }
        }
        let fn_ptr = quote!(unsafe extern "C" fn(#tys) #output);

        trait_fns.push(quote! {
            #(#docs)*
            #[doc = concat!("\n\nForwards to the native `", #symbol, "` symbol.")]
            unsafe fn #method(&self, #inputs) #output;
        });
        fields.push(quote!(#method: #fn_ptr));
        resolves.push(quote! {
            let #method = unsafe { *library.get::<#fn_ptr>(#symbol_bytes).map_err(|e| (#symbol, e))? };
        });
        raw_resolves.push(quote! {
            let #method = unsafe { ::core::mem::transmute::<*const (), #fn_ptr>(resolve(#symbol)?) };
        });
        field_names.push(method.clone());
        symbol_names.push(symbol.clone());
        forwards.push(quote! {
            unsafe fn #method(&self, #inputs) #output {
                ::tracing::trace!(#symbol);
                unsafe { (self.#method)(#args) }
            }
        });
    }

    Ok(quote! {
        #[allow(clippy::missing_safety_doc)]
        pub trait #api: Send + Sync {
            #(#trait_fns)*
        }

        /// A cuRAND shared library with every bound symbol resolved.
        pub struct #library {
            #(#fields,)*
            library: ::libloading::Library,
        }

        impl #library {
            /// Native names of every symbol the table binds, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[#(#symbol_names),*];

            /// Resolves every symbol in `library`.
            ///
            /// On failure, returns the name of the first symbol that could not be resolved.
            ///
            /// # Safety
            ///
            /// `library` must export the declared symbols with the declared signatures.
            pub unsafe fn from_library(
                library: ::libloading::Library,
            ) -> ::core::result::Result<Self, (&'static str, ::libloading::Error)> {
                #(#resolves)*
                Ok(Self {
                    #(#field_names,)*
                    library,
                })
            }

            /// Builds the table from symbols resolved by `resolve`, `None` if it lacks one.
            ///
            /// # Safety
            ///
            /// Every pointer `resolve` returns must be a function with the declared signature.
            #[cfg(test)]
            #[allow(dead_code)]
            pub(crate) unsafe fn from_raw_symbols(
                library: ::libloading::Library,
                mut resolve: impl FnMut(&'static str) -> ::core::option::Option<*const ()>,
            ) -> ::core::option::Option<Self> {
                #(#raw_resolves)*
                ::core::option::Option::Some(Self {
                    #(#field_names,)*
                    library,
                })
            }

            /// The underlying shared library handle.
            pub fn library(&self) -> &::libloading::Library {
                &self.library
            }
        }

        impl #api for #library {
            #(#forwards)*
        }
    })
}

/// `curandGetDirectionVectors32` with prefix `curand` becomes `get_direction_vectors32`.
fn method_name(symbol: &str, prefix: &str) -> String {
    let stem = symbol.strip_prefix(prefix).unwrap_or(symbol);
    let mut out = String::with_capacity(stem.len() + 8);
    for (i, c) in stem.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_snake_cases() {
        assert_eq!(
            method_name("curandCreateGenerator", "curand"),
            "create_generator"
        );
        assert_eq!(
            method_name("curandSetPseudoRandomGeneratorSeed", "curand"),
            "set_pseudo_random_generator_seed"
        );
        assert_eq!(
            method_name("curandGenerateLongLong", "curand"),
            "generate_long_long"
        );
        assert_eq!(
            method_name("curandGetDirectionVectors32", "curand"),
            "get_direction_vectors32"
        );
    }

    #[test]
    fn keeps_symbols_without_prefix() {
        assert_eq!(method_name("GetVersion", "curand"), "get_version");
        assert_eq!(method_name("version", ""), "version");
    }

    #[test]
    fn generates_one_forward_per_symbol() {
        let item: ItemForeignMod = parse_quote! {
            unsafe extern "C" {
                pub fn curandGetVersion(version: *mut i32) -> u32;
                pub fn curandGenerateSeeds(generator: *mut u8) -> u32;
            }
        };
        let api = format_ident!("Api");
        let library = format_ident!("Library");
        let tokens = expand(&item, &api, &library, "curand").unwrap().to_string();
        assert!(tokens.contains("fn get_version"));
        assert!(tokens.contains("fn generate_seeds"));
        assert!(tokens.contains("\"curandGetVersion\""));
        assert!(tokens.contains(":: tracing :: trace !"));
        assert!(tokens.contains("fn from_raw_symbols"));
    }

    #[test]
    fn rejects_variadics() {
        let item: ItemForeignMod = parse_quote! {
            unsafe extern "C" {
                pub fn printf(format: *const u8, ...) -> i32;
            }
        };
        let api = format_ident!("Api");
        let library = format_ident!("Library");
        assert!(expand(&item, &api, &library, "").is_err());
    }
}
