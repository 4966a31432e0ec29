//! Scan report rendering (text, JSON and XML)

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::SqlAttributesError;
use crate::{FileAttributes, LocatedAttribute};

/// Output format for scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `path:line: #[Name(...)]` line per attribute
    #[default]
    Text,
    /// Pretty-printed JSON array of files
    Json,
    /// `<SqlAttributes>` XML document
    Xml,
}

/// Render scan results in the requested format
pub fn render_report(files: &[FileAttributes], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(files)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(files)?),
        OutputFormat::Xml => {
            let mut buffer = Vec::new();
            write_xml(&mut buffer, files)?;
            String::from_utf8(buffer).map_err(|e| {
                SqlAttributesError::ReportError {
                    message: e.to_string(),
                }
                .into()
            })
        }
    }
}

fn render_text(files: &[FileAttributes]) -> String {
    let mut out = String::new();
    for file in files {
        for located in &file.attributes {
            out.push_str(&format!(
                "{}:{}: {}",
                file.path.display(),
                located.line,
                located.attribute
            ));
            if let Some(target) = &located.target {
                out.push_str(&format!(" -> {}", target));
            }
            out.push('\n');
        }
    }
    out
}

/// Write the XML report.
///
/// Generates:
/// ```xml
/// <SqlAttributes>
///   <File Path="schema.sql">
///     <Attribute Name="MetaData" Line="3" Target="users">
///       <Argument Key="comment" Value="Users"/>
///     </Attribute>
///   </File>
/// </SqlAttributes>
/// ```
pub fn write_xml<W: Write>(writer: W, files: &[FileAttributes]) -> anyhow::Result<()> {
    let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

    xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    xml_writer.write_event(Event::Start(BytesStart::new("SqlAttributes")))?;

    for file in files {
        let path = file.path.display().to_string();
        let element = BytesStart::new("File").with_attributes([("Path", path.as_str())]);
        xml_writer.write_event(Event::Start(element))?;
        for located in &file.attributes {
            write_attribute(&mut xml_writer, located)?;
        }
        xml_writer.write_event(Event::End(BytesEnd::new("File")))?;
    }

    xml_writer.write_event(Event::End(BytesEnd::new("SqlAttributes")))?;
    Ok(())
}

fn write_attribute<W: Write>(
    writer: &mut Writer<W>,
    located: &LocatedAttribute,
) -> anyhow::Result<()> {
    let line = located.line.to_string();
    let mut element = BytesStart::new("Attribute");
    element.push_attribute(("Name", located.attribute.name.as_str()));
    element.push_attribute(("Line", line.as_str()));
    if let Some(target) = &located.target {
        element.push_attribute(("Target", target.as_str()));
    }

    if located.attribute.arguments.is_empty() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }

    writer.write_event(Event::Start(element))?;
    for (key, value) in located.attribute.arguments.iter() {
        let argument = BytesStart::new("Argument").with_attributes([("Key", key), ("Value", value)]);
        writer.write_event(Event::Empty(argument))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Attribute")))?;
    Ok(())
}
