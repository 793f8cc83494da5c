use getset::Getters;

#[derive(Clone, Constructor, Getters, Debug, PartialEq)]
pub struct FieldSpec {
    #[get = "pub"]
    type_name: String,

    #[get = "pub"]
    field_name: String
}

#[derive(Clone, Constructor, Getters, Debug, PartialEq)]
pub struct NodeSpec {
    #[get = "pub"]
    type_name: String,

    #[get = "pub"]
    fields: Vec<FieldSpec>
}

#[derive(Clone, Constructor, Getters, Debug, PartialEq)]
pub struct GrammarTable {
    #[get = "pub"]
    base_name: String,

    #[get = "pub"]
    nodes: Vec<NodeSpec>
}

fn node(type_name: &str, fields: &[(&str, &str)]) -> NodeSpec {
    NodeSpec::new(
        String::from(type_name),
        fields.iter()
            .map(|(type_name, field_name)| FieldSpec::new(String::from(*type_name), String::from(*field_name)))
            .collect()
    )
}

/// The node shapes of the interpreter's syntax trees. Each table becomes one
/// generated compilation unit.
pub fn grammars() -> Vec<GrammarTable> {
    vec!(
        GrammarTable::new(String::from("Expr"), vec!(
            node("Literal", &[("Object", "value")]),
            node("Unary", &[("Token", "operator"), ("Expr", "right")]),
            node("Binary", &[("Expr", "left"), ("Token", "operator"), ("Expr", "right")]),
            node("Ternary", &[("Expr", "condition"), ("Expr", "trueExpr"), ("Expr", "falseExpr")]),
            node("Grouping", &[("Expr", "expression")]),
            node("Variable", &[("Token", "name")]),
            node("Assign", &[("Token", "name"), ("Expr", "value")]),
            node("Logical", &[("Expr", "left"), ("Token", "operator"), ("Expr", "right")]),
            node("Call", &[("Expr", "callee"), ("Token", "paren"), ("List<Expr>", "arguments")]),
            node("Get", &[("Expr", "object"), ("Token", "name")]),
            node("Set", &[("Expr", "object"), ("Token", "name"), ("Expr", "value")]),
            node("This", &[("Token", "keyword")])
        )),
        GrammarTable::new(String::from("Stmt"), vec!(
            node("Block", &[("List<Stmt>", "statements")]),
            node("Expression", &[("Expr", "expression")]),
            node("Print", &[("Expr", "expression")]),
            node("Var", &[("Token", "name"), ("Expr", "initializer")]),
            node("If", &[("Expr", "condition"), ("Stmt", "thenBranch"), ("Stmt", "elseBranch")]),
            node("While", &[("Expr", "condition"), ("Stmt", "body")]),
            node("Break", &[("Token", "token")]),
            node("Function", &[("Token", "name"), ("List<Token>", "params"), ("List<Stmt>", "body")]),
            node("Return", &[("Token", "keyword"), ("Expr", "value")]),
            node("Class", &[("Token", "name"), ("Expr.Variable", "superclass"), ("List<Stmt.Function>", "methods")])
        ))
    )
}
