//! Structured description of one generated compilation unit. The translator
//! builds these records from the grammar tables; codegen only renders them.

use getset::Getters;

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct Import {
    #[get = "pub"]
    text: String
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct Field {
    #[get = "pub"]
    java_type: String,

    #[get = "pub"]
    name: String
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct VisitorMethod {
    #[get = "pub"]
    name: String,

    #[get = "pub"]
    param_type: String,

    #[get = "pub"]
    param_name: String
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct VisitorInterface {
    #[get = "pub"]
    methods: Vec<VisitorMethod>
}

/// One concrete node class. `visitor_method` is the dispatch target of its
/// `accept` override, derived by the translator so the printer never invents
/// names.
#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct NodeClass {
    #[get = "pub"]
    name: String,

    #[get = "pub"]
    extends: String,

    #[get = "pub"]
    fields: Vec<Field>,

    #[get = "pub"]
    visitor_method: String
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct BaseClass {
    #[get = "pub"]
    name: String,

    #[get = "pub"]
    visitor: VisitorInterface,

    #[get = "pub"]
    nodes: Vec<NodeClass>
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct CompilationUnit {
    #[get = "pub"]
    name: String,

    #[get = "pub"]
    ext: String,

    #[get = "pub"]
    package: String,

    #[get = "pub"]
    imports: Vec<Import>,

    #[get = "pub"]
    class: BaseClass
}

#[derive(Constructor, Clone, Getters, Debug, PartialEq)]
pub struct JavaAst {
    #[get = "pub"]
    files: Vec<CompilationUnit>
}
