fn main() {
    // Catalog bindings are declared with uniffi proc-macros in uniffi_bindings.rs,
    // there is no UDL file to compile here
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
