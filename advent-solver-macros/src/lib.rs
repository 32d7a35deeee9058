//! Procedural macros for the advent-solver framework

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Solver` impl from `PartSolver` impls
///
/// Reads the declared part count from the `#[puzzle_solver(parts = N)]`
/// attribute and generates a `Solver` impl whose `solve_part` dispatches each
/// part number `1..=N` to the matching `PartSolver<N>` impl. Part numbers
/// outside that range answer `SolveError::PartNotImplemented`.
///
/// # Requirements
///
/// The type must implement `PuzzleParser` and `PartSolver<P>` for every
/// `P` in `1..=N`; a missing impl is a compile-time error at the generated
/// dispatch arm.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
/// use advent_solver_macros::PuzzleSolver;
///
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(parts = 2)]
/// pub struct Solver;
///
/// impl PuzzleParser for Solver { /* ... */ }
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .expect("PuzzleSolver derive macro requires #[puzzle_solver(...)] attribute");

    let mut parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    assert!(
        (1..=25).contains(&parts),
        "'parts' must be between 1 and 25"
    );

    let arms = (1..=parts).map(|p| {
        let lit = Literal::u8_suffixed(p);
        quote! {
            #lit => <#name as ::advent_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    let parts_lit = Literal::u8_suffixed(parts);

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut Self::Shared<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    other => ::core::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` of a `SolverPlugin`, letting the solver
/// be discovered and registered by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The calendar year (e.g. 2022)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g. ["grid"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If it doesn't, the generated
/// bound check produces a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver_macros::RegisterSolver;
///
/// #[derive(RegisterSolver)]
/// #[puzzle(year = 2022, day = 12, tags = ["grid"])]
/// struct Solver;
///
/// // impl PuzzleParser / PartSolver / Solver for Solver ...
/// ```
#[proc_macro_derive(RegisterSolver, attributes(puzzle))]
pub fn derive_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("RegisterSolver derive macro requires #[puzzle(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // for a readable error message when it doesn't
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
