//! BibTeX rewriting: resolve every entry with a `doi` field and merge the
//! rendered annotation into its `note` field.
//!
//! Parsing is delegated to `biblatex`, which tolerates nonstandard entry
//! types. Serialization is done here because the canonical field order and
//! two-space indentation are part of the output contract. Merged note
//! values are emitted as raw text, never round-tripped through biblatex
//! chunks: chunk serialization escapes backslashes and braces, which would
//! mangle the annotation's `\href{...}{...}` markup.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use biblatex::{Bibliography, Chunk, ChunksExt, Entry, Spanned};

use crate::annotation::resolve;
use crate::client::EuropePmcClient;
use crate::error::{Error, Result};

/// Canonical field order for output. Fields not listed here are emitted
/// afterwards, in the alphabetical order the parser stores them in.
const FIELD_ORDER: &[&str] =
    &["author", "title", "journal", "year", "volume", "number", "pages", "note"];

/// Fields whose values must not be re-escaped when serialized.
const VERBATIM_FIELDS: &[&str] = &["doi", "url", "file", "eprint"];

/// Rewrite a bibliography file, annotating every entry that carries a DOI.
///
/// Entries without a `doi` field pass through untouched. Entries with one
/// get the rendered annotation appended to their `note` field, or a fresh
/// `note` field if none existed. Lookups happen sequentially in document
/// order.
///
/// # Errors
///
/// Returns error if the input cannot be read or parsed, a lookup fails at
/// the transport level, or the output cannot be written.
pub async fn rewrite(client: &EuropePmcClient, input: &Path, output: &Path) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let bibliography =
        Bibliography::parse(&source).map_err(|e| Error::Bibliography(e.to_string()))?;

    let entries: Vec<Entry> = bibliography.into_iter().collect();
    let mut rendered = Vec::with_capacity(entries.len());

    for entry in &entries {
        let note = match entry.get("doi").map(ChunksExt::format_verbatim) {
            Some(doi) => {
                let annotation = resolve(client, &doi).await?;
                tracing::debug!(entry = %entry.key, doi = %annotation.doi(), "annotated entry");

                Some(match entry.get("note") {
                    Some(existing) => format!("{}{}", existing.format_verbatim(), annotation),
                    None => annotation.to_string(),
                })
            }
            None => None,
        };

        rendered.push(serialize_entry(entry, note.as_deref()));
    }

    fs::write(output, rendered.join("\n"))?;
    Ok(())
}

/// Serialize entries with the canonical field order and two-space
/// indentation.
#[must_use]
pub fn serialize(entries: &[Entry]) -> String {
    let rendered: Vec<String> = entries.iter().map(|entry| serialize_entry(entry, None)).collect();
    rendered.join("\n")
}

/// Serialize one entry. A `note` override replaces the entry's own note
/// field at its canonical position and is written verbatim.
fn serialize_entry(entry: &Entry, note: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "@{}{{{},", entry.entry_type, entry.key);

    for name in FIELD_ORDER {
        if *name == "note" {
            if let Some(raw) = note {
                let _ = writeln!(out, "  note = {{{raw}}},");
                continue;
            }
        }
        if let Some(chunks) = entry.get(name) {
            write_field(&mut out, name, chunks);
        }
    }

    for (name, chunks) in &entry.fields {
        if !FIELD_ORDER.contains(&name.as_str()) {
            write_field(&mut out, name, chunks);
        }
    }

    out.push_str("}\n");
    out
}

fn write_field(out: &mut String, name: &str, chunks: &[Spanned<Chunk>]) {
    let verbatim = VERBATIM_FIELDS.contains(&name);
    let _ = writeln!(out, "  {} = {},", name, chunks.to_biblatex_string(verbatim));
}
