//! Integration tests driving the `mailsift` binary.

use std::collections::HashSet;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("mailsift").unwrap()
}

/// Create a PDF with one page per entry. Each page shows a single line of
/// text; an empty entry produces a page with an empty content stream.
#[cfg(feature = "pdf")]
fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    use lopdf::{Object, Stream, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for text in texts {
        let content = if text.is_empty() {
            Vec::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(texts.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid)
            && let Ok(dict) = page_obj.as_dict_mut()
        {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Write bytes to a temporary `.pdf` file and return the handle.
fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

/// Run the binary on `path` and parse its single stdout line.
fn run_json(path: &str) -> (i32, serde_json::Value) {
    let output = cmd().arg(path).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "expected one line, got {stdout:?}");
    let value = serde_json::from_str(stdout.trim_end()).unwrap();
    (output.status.code().unwrap(), value)
}

fn email_set(value: &serde_json::Value) -> HashSet<String> {
    value["emails"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// --- Argument handling ---

#[test]
fn missing_path_is_usage_error() {
    cmd()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_describes_positional_path() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF_PATH"));
}

// --- Extraction ---

#[cfg(feature = "pdf")]
#[test]
fn two_page_document_with_blank_page() {
    let pdf = pdf_with_pages(&["Contact: alice@example.com or BOB@EXAMPLE.COM", ""]);
    let f = write_temp_pdf(&pdf);

    let (code, value) = run_json(f.path().to_str().unwrap());

    assert_eq!(code, 0);
    assert_eq!(value["success"], serde_json::json!(true));
    let expected: HashSet<String> = ["alice@example.com", "bob@example.com"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(email_set(&value), expected);
}

#[cfg(feature = "pdf")]
#[test]
fn document_without_emails_reports_empty_list() {
    let pdf = pdf_with_pages(&["Nothing to see here", "not-an-email user@nodot"]);
    let f = write_temp_pdf(&pdf);

    cmd()
        .arg(f.path())
        .assert()
        .success()
        .stdout("{\"success\":true,\"emails\":[]}\n");
}

#[cfg(feature = "pdf")]
#[test]
fn casing_variants_across_pages_collapse() {
    let pdf = pdf_with_pages(&["Foo@Bar.COM", "write to foo@bar.com today"]);
    let f = write_temp_pdf(&pdf);

    let (code, value) = run_json(f.path().to_str().unwrap());

    assert_eq!(code, 0);
    assert_eq!(value["emails"], serde_json::json!(["foo@bar.com"]));
}

#[cfg(feature = "pdf")]
#[test]
fn repeated_runs_agree() {
    let pdf = pdf_with_pages(&["z@last.org a@first.org", "m@middle.org"]);
    let f = write_temp_pdf(&pdf);
    let path = f.path().to_str().unwrap();

    let (_, first) = run_json(path);
    let (_, second) = run_json(path);

    assert_eq!(email_set(&first), email_set(&second));
    assert_eq!(email_set(&first).len(), 3);
}

// --- Failures reported in-band ---

#[cfg(feature = "pdf")]
#[test]
fn nonexistent_file_reports_failure_with_status_zero() {
    let (code, value) = run_json("/no/such/dir/missing.pdf");

    assert_eq!(code, 0);
    assert_eq!(value["success"], serde_json::json!(false));
    assert!(!value["error"].as_str().unwrap().is_empty());
    assert!(value.get("emails").is_none());
}

#[cfg(feature = "pdf")]
#[test]
fn non_pdf_file_reports_failure_with_status_zero() {
    let f = write_temp_pdf(b"just some text, alice@example.com, no PDF structure at all");

    let (code, value) = run_json(f.path().to_str().unwrap());

    assert_eq!(code, 0);
    assert_eq!(value["success"], serde_json::json!(false));
    assert!(value["error"].is_string());
}

// --- Builds without a PDF backend ---

#[cfg(not(feature = "pdf"))]
#[test]
fn missing_capability_exits_nonzero() {
    let f = write_temp_pdf(b"%PDF-1.5");

    cmd()
        .arg(f.path())
        .assert()
        .code(1)
        .stdout("{\"success\":false,\"error\":\"mupdf not installed\"}\n");
}
