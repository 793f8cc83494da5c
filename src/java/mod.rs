mod ast;
mod codegen;
mod translator;

pub use codegen::Code;
pub use translator::SchemaError;

use std::path::Path;

use crate::schema;

// Boilerplate shared by every generated compilation unit.
const PACKAGE: &str = "com.bloxi.lox";
const IMPORTS: &[&str] = &["java.util.List"];

pub fn code_gen(out_dir: &Path, tables: &[schema::GrammarTable]) -> Result<Code, SchemaError> {
    let translation_ctx = translator::Context::new(
        String::from(PACKAGE),
        IMPORTS.iter().map(|text| String::from(*text)).collect()
    );
    let ast0 = translator::translate(&translation_ctx, tables)?;

    let codegen_ctx = codegen::Context::new(out_dir.to_path_buf());
    let code = codegen::codegen(&codegen_ctx, ast0);

    Ok(code)
}
