//! End-to-end tests for header test generation against real directories.

use std::{fs, num::NonZeroUsize, path::Path, str::FromStr};

use hdrtest_codegen::{Error, Generator, HeaderTestRequest, headers::page_count};
use hdrtest_core::WriteResult;
use hdrtest_manifest::Manifest;
use tempfile::TempDir;

struct Module {
    source: TempDir,
    binary: TempDir,
}

impl Module {
    fn with_headers(files: &[&str]) -> Self {
        let source = TempDir::new().expect("Failed to create temp dir");
        let include = source.path().join("include");
        fs::create_dir_all(&include).unwrap();
        for file in files {
            fs::write(include.join(file), "#pragma once\n").unwrap();
        }
        Self {
            source,
            binary: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn request(&self, page_size: usize, page_number: usize) -> HeaderTestRequest {
        HeaderTestRequest {
            module_name: "ITKFoo".to_string(),
            module_source: self.source.path().to_path_buf(),
            module_binary: self.binary.path().to_path_buf(),
            page_size: NonZeroUsize::new(page_size).unwrap(),
            page_number: NonZeroUsize::new(page_number).unwrap(),
        }
    }

    fn generate(&self, manifest: &Manifest, page_size: usize, page_number: usize) -> String {
        let request = self.request(page_size, page_number);
        let result = Generator::new(manifest, &request)
            .generate()
            .expect("Failed to generate header test");
        fs::read_to_string(result.path).unwrap()
    }
}

/// Include lines of a generated file, in order.
fn include_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.contains("#include \""))
        .collect()
}

const FIVE: &[&str] = &["A.h", "B.h", "C.h", "D.h", "E.h"];

#[test]
fn test_first_page() {
    let module = Module::with_headers(FIVE);
    let content = module.generate(&Manifest::default(), 2, 1);

    assert_eq!(
        include_lines(&content),
        ["#include \"A.h\"", "#include \"B.h\""]
    );
}

#[test]
fn test_remainder_page() {
    let module = Module::with_headers(FIVE);
    let content = module.generate(&Manifest::default(), 2, 3);

    assert_eq!(include_lines(&content), ["#include \"E.h\""]);
}

#[test]
fn test_exact_multiple_produces_empty_trailing_page() {
    let module = Module::with_headers(&["A.h", "B.h"]);
    let manifest = Manifest::default();

    let first = module.generate(&manifest, 2, 1);
    assert_eq!(
        include_lines(&first),
        ["#include \"A.h\"", "#include \"B.h\""]
    );

    let second = module.generate(&manifest, 2, 2);
    assert!(include_lines(&second).is_empty());
    assert_eq!(second.matches("int main ( int , char* [] )").count(), 1);
    assert!(second.contains("return EXIT_SUCCESS;"));
}

#[test]
fn test_banned_header_is_commented() {
    let module = Module::with_headers(&["itkPyBuffer.h", "itkImage.h"]);
    let content = module.generate(&Manifest::default(), 10, 1);

    assert!(content.contains("// #include \"itkPyBuffer.h\" // Banned in hdrtest\n"));
    assert!(
        !content
            .lines()
            .any(|line| line.starts_with("#include \"itkPyBuffer"))
    );
    assert!(content.contains("\n#include \"itkImage.h\"\n"));
}

#[test]
fn test_variant_included_instead_of_declaration() {
    let module = Module::with_headers(&["Foo.h", "Foo.hxx", "Bar.h"]);
    let content = module.generate(&Manifest::default(), 10, 1);

    assert_eq!(
        include_lines(&content),
        ["#include \"Bar.h\"", "#include \"Foo.hxx\""]
    );
}

#[test]
fn test_output_location() {
    let module = Module::with_headers(&["A.h"]);
    let request = module.request(5, 1);

    let result = Generator::new(&Manifest::default(), &request)
        .generate()
        .unwrap();

    assert_eq!(
        result.path,
        module.binary.path().join("test").join("ITKFooHeaderTest1.cxx")
    );
    assert_eq!(result.write, WriteResult::Created);
    assert_eq!(result.plan.total_headers, 1);
    assert_eq!(result.plan.page_count, 1);
}

#[test]
fn test_regeneration_is_byte_identical() {
    let module = Module::with_headers(&["A.h", "B.h", "B.hxx", "itkPyBuffer.h"]);
    let manifest = Manifest::default();
    let request = module.request(3, 1);
    let generator = Generator::new(&manifest, &request);

    let first = generator.generate().unwrap();
    let first_content = fs::read(&first.path).unwrap();
    let second = generator.generate().unwrap();

    assert_eq!(second.write, WriteResult::Overwritten);
    assert_eq!(fs::read(&second.path).unwrap(), first_content);
}

#[test]
fn test_pages_cover_all_headers_once() {
    let names: Vec<String> = (0..23).map(|i| format!("itkHeader{:02}.h", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let module = Module::with_headers(&refs);
    let manifest = Manifest::default();
    let size = NonZeroUsize::new(5).unwrap();

    let mut seen = Vec::new();
    for page in 1..=page_count(names.len(), size) {
        let content = module.generate(&manifest, size.get(), page);
        for line in include_lines(&content) {
            seen.push(line.trim_start_matches("#include ").trim_matches('"').to_string());
        }
    }

    assert_eq!(seen, names);
}

#[test]
fn test_missing_include_dir_generates_empty_test() {
    let source = TempDir::new().unwrap();
    let binary = TempDir::new().unwrap();
    let request = HeaderTestRequest {
        module_name: "Empty".to_string(),
        module_source: source.path().join("does-not-exist"),
        module_binary: binary.path().to_path_buf(),
        page_size: NonZeroUsize::new(4).unwrap(),
        page_number: NonZeroUsize::new(1).unwrap(),
    };

    let result = Generator::new(&Manifest::default(), &request)
        .generate()
        .unwrap();

    let content = fs::read_to_string(result.path).unwrap();
    assert!(include_lines(&content).is_empty());
    assert!(content.contains("int main"));
}

#[test]
fn test_strict_missing_include_dir() {
    let manifest = Manifest::from_str("[headers]\nmissing_include_dir = \"error\"\n").unwrap();
    let module = Module::with_headers(&[]);
    fs::remove_dir(module.source.path().join("include")).unwrap();
    let request = module.request(2, 1);

    let err = Generator::new(&manifest, &request).generate().unwrap_err();

    assert!(matches!(err, Error::MissingIncludeDir { .. }));
    assert!(!module.binary.path().join("test").exists());
}

#[test]
fn test_write_failure_is_reported() {
    let module = Module::with_headers(&["A.h"]);
    // A file where the test directory should be
    fs::write(module.binary.path().join("test"), "").unwrap();
    let request = module.request(2, 1);

    let err = Generator::new(&Manifest::default(), &request)
        .generate()
        .unwrap_err();

    assert!(matches!(err, Error::Write(_)));
}

#[test]
fn test_preview_writes_nothing() {
    let module = Module::with_headers(&["A.h"]);
    let request = module.request(2, 1);

    let (file, plan) = Generator::new(&Manifest::default(), &request)
        .preview()
        .unwrap();

    assert!(file.content.contains("#include \"A.h\""));
    assert_eq!(plan.page.len(), 1);
    assert!(!Path::new(&file.path).exists());
    assert!(!module.binary.path().join("test").exists());
}

#[test]
fn test_custom_layout() {
    let manifest = Manifest::from_str(
        r#"
        [headers]
        extension = "hpp"
        variant_extension = "ipp"
        include_dir = "inc"
        banned = ["Python.hpp"]

        [output]
        extension = "cpp"
        test_dir = "header-tests"
        generator_name = "gen"
        "#,
    )
    .unwrap();

    let source = TempDir::new().unwrap();
    let binary = TempDir::new().unwrap();
    let inc = source.path().join("inc");
    fs::create_dir_all(&inc).unwrap();
    for file in ["Widget.hpp", "Widget.ipp", "Python.hpp", "Old.h"] {
        fs::write(inc.join(file), "").unwrap();
    }
    let request = HeaderTestRequest {
        module_name: "Lib".to_string(),
        module_source: source.path().to_path_buf(),
        module_binary: binary.path().to_path_buf(),
        page_size: NonZeroUsize::new(10).unwrap(),
        page_number: NonZeroUsize::new(1).unwrap(),
    };

    let result = Generator::new(&manifest, &request).generate().unwrap();

    assert_eq!(
        result.path,
        binary.path().join("header-tests").join("LibHeaderTest1.cpp")
    );
    let content = fs::read_to_string(&result.path).unwrap();
    assert_eq!(
        include_lines(&content),
        [
            "// #include \"Python.hpp\" // Banned in gen",
            "#include \"Widget.ipp\"",
        ]
    );
    assert!(content.contains("// This file has been generated by gen\n"));
}
