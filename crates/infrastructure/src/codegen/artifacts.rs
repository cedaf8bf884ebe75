//! Output file assembly.

use dispatchgen_domain::{DispatchModel, GeneratorSettings};

use super::loader::{LoaderEmitter, LoaderSpec};
use super::mixin::{MixinEmitter, MixinSpec};
use super::table::TableEmitter;

const EXTERN_C_BEGIN: &str = "#ifdef __cplusplus\nextern \"C\" {\n#endif // __cplusplus";
const EXTERN_C_END: &str = "#ifdef __cplusplus\n}\n#endif // __cplusplus";

/// The three generated files, rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// C header declaring the table and both loaders.
    pub header: String,
    /// C++ header with the three mixin templates.
    pub mixin_header: String,
    /// C source defining both loaders.
    pub source: String,
}

/// Renders all artifacts.
///
/// `header_file_name` is the bare file name the source file and mixin
/// header include.
#[must_use]
pub fn render_artifacts(
    model: &DispatchModel,
    settings: &GeneratorSettings,
    header_file_name: &str,
) -> Artifacts {
    let instance_loader = LoaderSpec::instance(settings);
    let device_loader = LoaderSpec::device(settings);

    let header = [
        "#pragma once",
        format!("#include {}", settings.api_include).as_str(),
        "",
        EXTERN_C_BEGIN,
        "",
        TableEmitter::emit(&model.conditions, settings).as_str(),
        "",
        LoaderEmitter::prototype(&instance_loader, settings).as_str(),
        LoaderEmitter::prototype(&device_loader, settings).as_str(),
        "",
        EXTERN_C_END,
    ]
    .join("\n");

    let source = [
        format!("#include \"{header_file_name}\"").as_str(),
        "",
        EXTERN_C_BEGIN,
        "",
        LoaderEmitter::emit(model, &instance_loader, settings).as_str(),
        "",
        LoaderEmitter::emit(model, &device_loader, settings).as_str(),
        "",
        EXTERN_C_END,
    ]
    .join("\n");

    let mixin_header = [
        "#pragma once",
        format!("#include \"{header_file_name}\"").as_str(),
        "",
        "#include <cassert>",
        "",
        MixinEmitter::emit(model, &MixinSpec::instance(settings), settings).as_str(),
        "",
        MixinEmitter::emit(model, &MixinSpec::physical_device(settings), settings).as_str(),
        "",
        MixinEmitter::emit(model, &MixinSpec::device(settings), settings).as_str(),
    ]
    .join("\n");

    Artifacts {
        header,
        mixin_header,
        source,
    }
}
