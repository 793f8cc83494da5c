use getset::Getters;
use indoc::indoc;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::java::ast;

#[derive(Constructor, Clone, Getters)]
pub struct Context {
    #[get = "pub"]
    out_dir: PathBuf
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct Code {
    #[get = "pub"]
    files: HashMap<PathBuf, String>
}

// One nesting level per call. Blank lines stay empty.
fn indent(code: &str) -> String {
    code.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn codegen_import(import: &ast::Import) -> String {
    format!("import {};", import.text())
}

fn codegen_field(field: &ast::Field) -> String {
    format!("final {} {};", field.java_type(), field.name())
}

fn codegen_visitor_method(method: &ast::VisitorMethod) -> String {
    format!("R {} ({} {});", method.name(), method.param_type(), method.param_name())
}

fn codegen_visitor_interface(visitor: &ast::VisitorInterface) -> String {
    if visitor.methods().is_empty() {
        return String::from("interface Visitor<R> {\n}");
    }

    indoc!("
        interface Visitor<R> {
        #METHODS
        }")
    .replace(
        "#METHODS",
        &indent(
            &visitor.methods()
                .iter()
                .map(codegen_visitor_method)
                .collect::<Vec<String>>()
                .join("\n")
        )
    )
}

fn codegen_constructor(class: &ast::NodeClass) -> String {
    if class.fields().is_empty() {
        return format!("{}() {{\n}}", class.name());
    }

    let params = class.fields()
        .iter()
        .map(|f| format!("{} {}", f.java_type(), f.name()))
        .collect::<Vec<String>>()
        .join(", ");

    let assignments = class.fields()
        .iter()
        .map(|f| format!("this.{} = {};", f.name(), f.name()))
        .collect::<Vec<String>>()
        .join("\n");

    indoc!("
        #NAME(#PARAMS) {
        #ASSIGNMENTS
        }")
    .replace("#NAME", class.name())
    .replace("#PARAMS", &params)
    .replace("#ASSIGNMENTS", &indent(&assignments))
}

fn codegen_accept_override(class: &ast::NodeClass) -> String {
    indoc!("
        @Override
        <R> R accept(Visitor<R> visitor) {
          return visitor.#METHOD(this);
        }")
    .replace("#METHOD", class.visitor_method())
}

fn codegen_node_class(class: &ast::NodeClass) -> String {
    let mut sections = vec!();
    if !class.fields().is_empty() {
        sections.push(
            class.fields()
                .iter()
                .map(codegen_field)
                .collect::<Vec<String>>()
                .join("\n")
        );
    }
    sections.push(codegen_constructor(class));
    sections.push(codegen_accept_override(class));

    indoc!("
        static class #NAME extends #BASE {
        #BODY
        }")
    .replace("#NAME", class.name())
    .replace("#BASE", class.extends())
    .replace("#BODY", &indent(&sections.join("\n\n")))
}

fn codegen_base_class(class: &ast::BaseClass) -> String {
    let mut members = vec!();
    members.push(codegen_visitor_interface(class.visitor()));
    members.push(String::from("abstract <R> R accept(Visitor<R> visitor);"));
    members.extend(class.nodes().iter().map(codegen_node_class));

    indoc!("
        abstract class #NAME {
        #MEMBERS
        }")
    .replace("#NAME", class.name())
    .replace("#MEMBERS", &indent(&members.join("\n\n")))
}

pub fn codegen_java_file(ctx: &Context, unit: &ast::CompilationUnit) -> (PathBuf, String) {
    let mut path = ctx.out_dir().clone();
    path.push(format!("{}.{}", unit.name(), unit.ext()));

    let code = indoc!("
        package #PACKAGE;

        #IMPORTS

        #CLASS
        ")
    .replace("#PACKAGE", unit.package())
    .replace(
        "#IMPORTS",
        &unit.imports()
            .iter()
            .map(codegen_import)
            .collect::<Vec<String>>()
            .join("\n")
    )
    .replace("#CLASS", &codegen_base_class(unit.class()));

    (path, code)
}

pub fn codegen(ctx: &Context, ast: ast::JavaAst) -> Code {
    let mut files = HashMap::new();
    files.extend(ast.files().iter().map(|unit| codegen_java_file(ctx, unit)));

    Code::new(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::translator;
    use crate::schema;
    use pretty_assertions::assert_eq;

    fn ctx() -> Context {
        Context::new(PathBuf::from("out"))
    }

    fn translation_ctx() -> translator::Context {
        translator::Context::new(String::from("com.bloxi.lox"), vec!(String::from("java.util.List")))
    }

    fn node(type_name: &str, fields: &[(&str, &str)]) -> schema::NodeSpec {
        schema::NodeSpec::new(
            String::from(type_name),
            fields.iter()
                .map(|(t, f)| schema::FieldSpec::new(String::from(*t), String::from(*f)))
                .collect()
        )
    }

    fn render(table: schema::GrammarTable) -> (PathBuf, String) {
        let ast = translator::translate(&translation_ctx(), &[table]).unwrap();
        codegen_java_file(&ctx(), &ast.files()[0])
    }

    #[test]
    fn test_literal_and_unary_table_renders_reference_output() {
        let table = schema::GrammarTable::new(String::from("Expr"), vec!(
            node("Literal", &[("Object", "value")]),
            node("Unary", &[("Token", "operator"), ("Expr", "right")])
        ));

        let (path, code) = render(table);

        assert_eq!(PathBuf::from("out/Expr.java"), path);
        assert_eq!(
            indoc!("
                package com.bloxi.lox;

                import java.util.List;

                abstract class Expr {
                  interface Visitor<R> {
                    R visitLiteralExpr (Literal expr);
                    R visitUnaryExpr (Unary expr);
                  }

                  abstract <R> R accept(Visitor<R> visitor);

                  static class Literal extends Expr {
                    final Object value;

                    Literal(Object value) {
                      this.value = value;
                    }

                    @Override
                    <R> R accept(Visitor<R> visitor) {
                      return visitor.visitLiteralExpr(this);
                    }
                  }

                  static class Unary extends Expr {
                    final Token operator;
                    final Expr right;

                    Unary(Token operator, Expr right) {
                      this.operator = operator;
                      this.right = right;
                    }

                    @Override
                    <R> R accept(Visitor<R> visitor) {
                      return visitor.visitUnaryExpr(this);
                    }
                  }
                }
                "),
            code
        );
    }

    #[test]
    fn test_empty_table_renders_base_and_empty_visitor_only() {
        let table = schema::GrammarTable::new(String::from("Stmt"), vec!());

        let (path, code) = render(table);

        assert_eq!(PathBuf::from("out/Stmt.java"), path);
        assert_eq!(
            indoc!("
                package com.bloxi.lox;

                import java.util.List;

                abstract class Stmt {
                  interface Visitor<R> {
                  }

                  abstract <R> R accept(Visitor<R> visitor);
                }
                "),
            code
        );
    }

    #[test]
    fn test_node_without_fields_renders_empty_constructor() {
        let class = ast::NodeClass::new(
            String::from("Nil"),
            String::from("Expr"),
            vec!(),
            String::from("visitNilExpr")
        );

        assert_eq!(
            indoc!("
                static class Nil extends Expr {
                  Nil() {
                  }

                  @Override
                  <R> R accept(Visitor<R> visitor) {
                    return visitor.visitNilExpr(this);
                  }
                }"),
            codegen_node_class(&class)
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let table = || schema::GrammarTable::new(String::from("Expr"), vec!(
            node("Binary", &[("Expr", "left"), ("Token", "operator"), ("Expr", "right")]),
            node("Grouping", &[("Expr", "expression")])
        ));

        assert_eq!(render(table()), render(table()));
    }

    #[test]
    fn test_codegen_emits_one_file_per_unit() {
        let tables = vec!(
            schema::GrammarTable::new(String::from("Expr"), vec!(node("Literal", &[("Object", "value")]))),
            schema::GrammarTable::new(String::from("Stmt"), vec!(node("Print", &[("Expr", "expression")])))
        );

        let ast = translator::translate(&translation_ctx(), &tables).unwrap();
        let code = codegen(&ctx(), ast);

        assert_eq!(2, code.files().len());
        assert!(code.files().contains_key(&PathBuf::from("out/Expr.java")));
        assert!(code.files().contains_key(&PathBuf::from("out/Stmt.java")));
    }
}
