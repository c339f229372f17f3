use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Implements `From<T> for ojo_wasm_std::error::ContractError` for an error type,
/// so module errors bubble up to the contract entry points with `?`.
///
/// # Examples
///
/// ```
/// use ojo_wasm_std::error::ContractError;
/// use ojo_wasm_std_derive::IntoContractError;
///
/// #[derive(thiserror::Error, Debug, IntoContractError)]
/// enum Error {
///     #[error("some error")]
///     SomeError,
/// }
///
/// let _err: ContractError = Error::SomeError.into();
/// ```
#[proc_macro_derive(IntoContractError)]
pub fn into_contract_error_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).expect("derive input must parse");

    let name = &ast.ident;

    let gen = quote! {
        impl From<#name> for ojo_wasm_std::error::ContractError {
            fn from(error: #name) -> Self {
                use error_stack::report;

                report!(error).into()
            }
        }
    };

    gen.into()
}
