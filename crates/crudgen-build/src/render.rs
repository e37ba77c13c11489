//! Route-module rendering.
//!
//! Output is plain Express-style JavaScript text, matching what the
//! downstream routing layer mounts. Rendering trusts its inputs (the
//! orchestrator already filtered non-candidates) and is deterministic:
//! identical inputs yield byte-identical text.

use crate::statement::StatementSet;
use crudgen_schema::Field;
use std::fmt::Write;

/// Render the complete routing module for one table: doc header, then a
/// factory export registering the four POST handlers under `/<table>`.
#[must_use]
pub fn render_module(table: &str, fields: &[Field], statements: &StatementSet) -> String {
    let mut out = String::new();

    out.push_str("var express = require(\"express\");\n\n");
    doc_header(&mut out, table, fields);

    out.push_str("exports.router = function (connection) {\n");
    out.push_str("\tvar router = express.Router();\n\n");

    handler(&mut out, table, "create", "/add", &statements.insert);
    handler(&mut out, table, "read", "/get", &statements.select);
    handler(&mut out, table, "update", "/update", &statements.update);
    handler(&mut out, table, "remove", "/delete", &statements.delete);

    out.push_str("\treturn router;\n");
    out.push_str("};\n");

    out
}

// table name plus one line per field: declared type, then the key role
// annotation when the catalog reported one
fn doc_header(out: &mut String, table: &str, fields: &[Field]) {
    out.push_str("/**\n");
    let _ = writeln!(out, " * @function {table}");

    for field in fields {
        let _ = write!(out, " * @param {{{}}} {}", field.ty, field.name);
        if !field.key.is_none() {
            let _ = write!(out, " - Key: {}", field.key);
        }
        out.push('\n');
    }

    out.push_str(" */\n\n");
}

fn handler(out: &mut String, table: &str, local: &str, route: &str, statement: &str) {
    let _ = writeln!(out, "\tvar {local} = express.Router();");
    let _ = writeln!(out, "\t{local}.post(\"{route}\", function (req, res) {{");
    let _ = writeln!(out, "\t\tconnection.query(\"{statement}\", req.body, res);");
    out.push_str("\t});\n");
    let _ = writeln!(out, "\trouter.use(\"/{table}\", {local});");
    out.push('\n');
}
