use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file = PathBuf::from(&crate_dir)
        .join("../../Vec3FFI.h")
        .display()
        .to_string();

    // Generate C bindings using cbindgen. `Vector3` lives in vec3-core, so that
    // crate is parsed too.
    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("VEC3_FFI_H")
        .with_parse_deps(true)
        .with_parse_include(&["vec3-core"])
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(output_file);

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=../core/src/core_types/vector3.rs");
}
