use getset::Getters;
use std::collections::HashSet;
use thiserror::Error;

use crate::java::ast;
use crate::schema;

/// A grammar table that would render into non-compiling or silently
/// shadowed output. Nothing is emitted for the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("duplicate node type `{type_name}` in grammar `{base_name}`")]
    DuplicateNode {
        base_name: String,
        type_name: String
    },

    #[error("duplicate field `{field_name}` on node `{base_name}.{type_name}`")]
    DuplicateField {
        base_name: String,
        type_name: String,
        field_name: String
    }
}

/// Fixed target-language boilerplate: every generated unit shares the same
/// package declaration and import list.
#[derive(Constructor, Clone, Getters)]
pub struct Context {
    #[get = "pub"]
    package: String,

    #[get = "pub"]
    imports: Vec<String>
}

fn visitor_method_name(type_name: &str, base_name: &str) -> String {
    format!("visit{}{}", type_name, base_name)
}

fn check_distinct_fields(table: &schema::GrammarTable, node: &schema::NodeSpec) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in node.fields() {
        if !seen.insert(field.field_name()) {
            return Err(SchemaError::DuplicateField {
                base_name: table.base_name().clone(),
                type_name: node.type_name().clone(),
                field_name: field.field_name().clone()
            });
        }
    }
    Ok(())
}

fn check_distinct_nodes(table: &schema::GrammarTable) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for node in table.nodes() {
        if !seen.insert(node.type_name()) {
            return Err(SchemaError::DuplicateNode {
                base_name: table.base_name().clone(),
                type_name: node.type_name().clone()
            });
        }
    }
    Ok(())
}

fn translate_visitor_method(table: &schema::GrammarTable, node: &schema::NodeSpec) -> ast::VisitorMethod {
    ast::VisitorMethod::new(
        visitor_method_name(node.type_name(), table.base_name()),
        node.type_name().clone(),
        table.base_name().to_lowercase()
    )
}

fn translate_node(table: &schema::GrammarTable, node: &schema::NodeSpec) -> Result<ast::NodeClass, SchemaError> {
    check_distinct_fields(table, node)?;

    let fields = node.fields()
        .iter()
        .map(|f| ast::Field::new(f.type_name().clone(), f.field_name().clone()))
        .collect();

    Ok(ast::NodeClass::new(
        node.type_name().clone(),
        table.base_name().clone(),
        fields,
        visitor_method_name(node.type_name(), table.base_name())
    ))
}

fn translate_table(ctx: &Context, table: &schema::GrammarTable) -> Result<ast::CompilationUnit, SchemaError> {
    check_distinct_nodes(table)?;

    let visitor = ast::VisitorInterface::new(
        table.nodes()
            .iter()
            .map(|node| translate_visitor_method(table, node))
            .collect()
    );

    let mut nodes = vec!();
    for node in table.nodes() {
        nodes.push(translate_node(table, node)?);
    }

    Ok(ast::CompilationUnit::new(
        table.base_name().clone(),
        String::from("java"),
        ctx.package().clone(),
        ctx.imports().iter().map(|text| ast::Import::new(text.clone())).collect(),
        ast::BaseClass::new(table.base_name().clone(), visitor, nodes)
    ))
}

pub fn translate(ctx: &Context, tables: &[schema::GrammarTable]) -> Result<ast::JavaAst, SchemaError> {
    let mut files = vec!();
    for table in tables {
        files.push(translate_table(ctx, table)?);
    }
    Ok(ast::JavaAst::new(files))
}
