//! Flat-file and graph-interchange export of a finished network.
//!
//! Exporters read the network only through its accessors and write to any
//! `std::io::Write` sink.

use std::io::{self, Write};

use crate::core::network::CharacterNetwork;

/// Write vertices as CSV: `Id,Label,Gender,Mentions`.
pub fn write_vertex_csv(network: &CharacterNetwork, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "Id,Label,Gender,Mentions")?;
    for vertex in network.vertices() {
        writeln!(
            writer,
            "{},{},{},{}",
            vertex.id.0,
            csv_field(&vertex.label),
            vertex.gender.as_str(),
            vertex.mention_count
        )?;
    }
    Ok(())
}

/// Write edges as CSV: `Source,Target,Weight`, plus `Pos,Neg,Obj`
/// columns when the network carries sentiment.
pub fn write_edge_csv(network: &CharacterNetwork, writer: &mut dyn Write) -> io::Result<()> {
    if network.has_sentiment() {
        writeln!(writer, "Source,Target,Weight,Pos,Neg,Obj")?;
    } else {
        writeln!(writer, "Source,Target,Weight")?;
    }
    for edge in network.edges() {
        write!(writer, "{},{},{}", edge.source.0, edge.target.0, edge.weight)?;
        if let Some(sentiment) = edge.sentiment {
            write!(writer, ",{},{},{}", sentiment.pos, sentiment.neg, sentiment.obj)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the network as a GraphML document (undirected graph with typed
/// vertex/edge attribute keys), loadable by igraph and Gephi.
pub fn write_graphml(network: &CharacterNetwork, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">"#
    )?;
    writeln!(
        writer,
        r#"  <key id="label" for="node" attr.name="label" attr.type="string"/>"#
    )?;
    writeln!(
        writer,
        r#"  <key id="gender" for="node" attr.name="gender" attr.type="string"/>"#
    )?;
    writeln!(
        writer,
        r#"  <key id="mentions" for="node" attr.name="mentions" attr.type="int"/>"#
    )?;
    writeln!(
        writer,
        r#"  <key id="weight" for="edge" attr.name="weight" attr.type="int"/>"#
    )?;
    if network.has_sentiment() {
        for key in ["pos", "neg", "obj"] {
            writeln!(
                writer,
                r#"  <key id="{key}" for="edge" attr.name="{key}" attr.type="double"/>"#
            )?;
        }
    }
    writeln!(writer, r#"  <graph id="G" edgedefault="undirected">"#)?;

    for vertex in network.vertices() {
        writeln!(writer, r#"    <node id="n{}">"#, vertex.id.0)?;
        writeln!(
            writer,
            r#"      <data key="label">{}</data>"#,
            xml_escape(&vertex.label)
        )?;
        writeln!(
            writer,
            r#"      <data key="gender">{}</data>"#,
            vertex.gender.as_str()
        )?;
        writeln!(
            writer,
            r#"      <data key="mentions">{}</data>"#,
            vertex.mention_count
        )?;
        writeln!(writer, "    </node>")?;
    }

    for edge in network.edges() {
        writeln!(
            writer,
            r#"    <edge source="n{}" target="n{}">"#,
            edge.source.0, edge.target.0
        )?;
        writeln!(writer, r#"      <data key="weight">{}</data>"#, edge.weight)?;
        if let Some(sentiment) = edge.sentiment {
            writeln!(writer, r#"      <data key="pos">{}</data>"#, sentiment.pos)?;
            writeln!(writer, r#"      <data key="neg">{}</data>"#, sentiment.neg)?;
            writeln!(writer, r#"      <data key="obj">{}</data>"#, sentiment.obj)?;
        }
        writeln!(writer, "    </edge>")?;
    }

    writeln!(writer, "  </graph>")?;
    writeln!(writer, "</graphml>")?;
    Ok(())
}

/// Write edges as whitespace-delimited `source target weight` lines.
pub fn write_edge_list(network: &CharacterNetwork, writer: &mut dyn Write) -> io::Result<()> {
    for edge in network.edges() {
        writeln!(writer, "{} {} {}", edge.source.0, edge.target.0, edge.weight)?;
    }
    Ok(())
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
