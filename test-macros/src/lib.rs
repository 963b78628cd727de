use proc_macro::TokenStream;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use proc_macro2::Span;
use quote::quote;
use syn::{self, Ident, LitStr};
use walkdir::WalkDir;

const EXPECTED_SUFFIX: &str = ".expected.yaml";

struct TestCase {
    connective: String,
    expected_path: PathBuf,
}

/// Generates one `#[test]` per `<connective>.expected.yaml` file found under
/// the given directory, relative to the invoking crate's manifest.
#[proc_macro]
pub fn test_connectives(input: TokenStream) -> TokenStream {
    let path_lit = syn::parse_macro_input!(input as LitStr);
    let rel_path = path_lit.value();

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let base_path = Path::new(&manifest_dir).join(&rel_path);

    if !base_path.exists() {
        panic!(
            "Test data directory does not exist: {}",
            base_path.display()
        );
    }

    let mut test_cases = Vec::new();

    for entry in WalkDir::new(&base_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };

        if let Some(stem) = file_name.strip_suffix(EXPECTED_SUFFIX) {
            test_cases.push(TestCase {
                connective: stem.to_string(),
                expected_path: path.to_path_buf(),
            });
        }
    }

    test_cases.sort_by(|a, b| a.connective.cmp(&b.connective));

    let tests = test_cases.iter().map(|tc| {
        let test_name = format!("truth_table_{}", tc.connective);
        let test_ident = Ident::new(&test_name, Span::call_site());

        let expected_path = tc.expected_path.to_str().expect("Invalid UTF-8 in path");
        let connective = &tc.connective;

        quote! {
            #[test]
            fn #test_ident() -> Result<(), Box<dyn std::error::Error>> {
                test_connective(#connective, #expected_path)?;
                Ok(())
            }
        }
    });

    let expanded = quote! {
        use std::io::BufReader;
        use std::fs::File;
        use ternary_core::{Connective, DOMAIN, Ternary, TruthTable};

        fn test_connective(name: &str, expected_path: &str) -> Result<(), Box<dyn std::error::Error>> {
            let connective = Connective::from_name(name).ok_or("Unknown connective")?;

            let expected_file = File::open(expected_path)?;
            let expected_reader = BufReader::new(expected_file);
            let expected: Vec<(Ternary, Ternary, Ternary)> = serde_norway::from_reader(expected_reader)?;

            let pairs: Vec<(Ternary, Ternary)> = expected.iter().map(|&(x, y, _)| (x, y)).collect();
            let domain: Vec<(Ternary, Ternary)> = DOMAIN
                .iter()
                .flat_map(|&x| DOMAIN.iter().map(move |&y| (x, y)))
                .collect();
            assert_eq!(pairs, domain, "Fixture rows out of order: {}", expected_path);

            for &(x, y, result) in &expected {
                assert_eq!(connective.eval(x, y), result, "{} {} {}", x, connective, y);
                assert_eq!(
                    connective.apply(x.as_str(), y.as_str())?,
                    result,
                    "{} {} {} (checked)",
                    x,
                    connective,
                    y
                );
            }

            let column: Vec<Ternary> = expected.iter().map(|&(_, _, result)| result).collect();
            assert_eq!(
                TruthTable::new().column(connective),
                column,
                "Column mismatch for connective: {}\nExpected from: {}",
                name,
                expected_path
            );

            Ok(())
        }

        #(#tests)*
    };

    TokenStream::from(expanded)
}
