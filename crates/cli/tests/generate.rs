//! Integration tests for the `swaggen` binary.
//!
//! Each test writes a document into a temporary directory, runs the built
//! binary against it and inspects the generated files and exit status.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TICKETS_JSON: &str = r##"{
  "swagger": "2.0",
  "info": { "title": "Tickets", "version": "1.0.0" },
  "paths": {
    "/tickets/{id}": {
      "get": {
        "operationId": "getTicket",
        "parameters": [{ "name": "id", "in": "path", "required": true, "type": "string" }],
        "responses": { "200": { "description": "OK", "schema": { "$ref": "#/definitions/TicketDTO" } } }
      }
    }
  },
  "definitions": {
    "TicketDTO": {
      "type": "object",
      "properties": {
        "id": { "type": "string" },
        "status": { "type": "string", "enum": ["OPEN", "CLOSED"] }
      }
    }
  }
}"##;

fn swaggen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swaggen"))
        .args(args)
        .env_remove("SWAGGEN_LOG")
        .output()
        .expect("Failed to run swaggen")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_generates_models_and_client() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let source = temp.path().join("tickets.json");
    fs::write(&source, TICKETS_JSON).unwrap();
    let dest = temp.path().join("generated");

    let output = swaggen(&["-s", path_str(&source), "-d", path_str(&dest)]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(dest.join("models.ts")).unwrap(),
        "export interface TicketDTO {\n  id?: string;\n  status?: \"OPEN\" | \"CLOSED\";\n}\n"
    );
    assert_eq!(
        fs::read_to_string(dest.join("client.ts")).unwrap(),
        "import { TicketDTO } from \"./models\";\n\nexport interface ApiClient {\n  getTicket: (id: string) => Promise<TicketDTO>;\n}\n"
    );
}

#[test]
fn test_custom_names() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let source = temp.path().join("tickets.json");
    fs::write(&source, TICKETS_JSON).unwrap();
    let dest = temp.path().join("generated");

    let output = swaggen(&[
        "--source",
        path_str(&source),
        "--destination",
        path_str(&dest),
        "--clientName",
        "TicketService",
        "--models-file",
        "dto",
        "--client-file",
        "service",
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let client = fs::read_to_string(dest.join("service.ts")).unwrap();
    assert!(client.starts_with("import { TicketDTO } from \"./dto\";\n"));
    assert!(client.contains("export interface TicketService {"));
    assert!(dest.join("dto.ts").exists());
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let source = temp.path().join("tickets.json");
    fs::write(&source, TICKETS_JSON).unwrap();
    let dest = temp.path().join("generated");

    assert!(swaggen(&["-s", path_str(&source), "-d", path_str(&dest)]).status.success());
    let first = fs::read(dest.join("client.ts")).unwrap();
    assert!(swaggen(&["-s", path_str(&source), "-d", path_str(&dest)]).status.success());
    let second = fs::read(dest.join("client.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_source_exits_with_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dest = temp.path().join("generated");

    let output = swaggen(&["-s", path_str(&temp.path().join("absent.json")), "-d", path_str(&dest)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: failed to read API document"), "stderr: {stderr}");
    assert!(!dest.exists());
}

#[test]
fn test_document_without_definitions_exits_with_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let source = temp.path().join("api.yaml");
    fs::write(&source, "swagger: \"2.0\"\npaths: {}\n").unwrap();
    let dest = temp.path().join("generated");

    let output = swaggen(&["-s", path_str(&source), "-d", path_str(&dest)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no model definitions"));
    assert!(!dest.exists());
}

#[test]
fn test_missing_required_flags_is_a_usage_error() {
    let output = swaggen(&["-s", "api.json"]);
    assert!(!output.status.success());
}
