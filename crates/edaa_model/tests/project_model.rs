//! End-to-end checks of the project model through its public API.

use edaa_model::{
    FileKind, FileType, ModelError, Project, VerilogVersion, VhdlVersion, DEFAULT_FILE_SET_NAME,
};
use std::path::Path;

/// Builds a small design: a `sources_1` fileset with an `ip` child, and a
/// `sim_1` fileset holding a testbench.
fn sample_project() -> Project {
    let mut project = Project::new("blinky").with_root_directory("/work/blinky");

    let sources = project.new_file_set("sources_1");
    let ip = project.new_file_set("ip");
    let sim = project.new_file_set("sim_1");
    project.add_file_set(sources).unwrap();
    project.add_file_set(sim).unwrap();
    project.add_child_file_set(sources, ip).unwrap();

    project
        .new_file_in(sources, "src/top.vhd", FileKind::vhdl(VhdlVersion::Vhdl2008))
        .unwrap();
    project
        .new_file_in(
            sources,
            "src/uart.v",
            FileKind::VerilogSource {
                version: Some(VerilogVersion::Verilog2001),
            },
        )
        .unwrap();
    project
        .new_file_in(ip, "ip/clk_wiz.xci", FileKind::IpCoreInstantiation)
        .unwrap();
    project
        .new_file_in(sim, "sim/tb_top.vhd", FileKind::vhdl(VhdlVersion::Vhdl2008))
        .unwrap();
    project.new_file("README.md", FileKind::Generic);
    project
}

fn paths(project: &Project, filter: FileType) -> Vec<String> {
    project
        .files(filter, None)
        .unwrap()
        .map(|f| f.path().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn traversal_order_across_project() {
    let project = sample_project();
    assert_eq!(
        paths(&project, FileType::Any),
        vec![
            "README.md",
            "ip/clk_wiz.xci",
            "src/top.vhd",
            "src/uart.v",
            "sim/tb_top.vhd"
        ]
    );
}

#[test]
fn filter_by_supertype() {
    let project = sample_project();
    assert_eq!(
        paths(&project, FileType::HdlSourceFile),
        vec!["src/top.vhd", "src/uart.v", "sim/tb_top.vhd"]
    );
    assert_eq!(paths(&project, FileType::XmlFile), vec!["ip/clk_wiz.xci"]);
    assert!(paths(&project, FileType::ConstraintFile).is_empty());
}

#[test]
fn scoped_project_traversal() {
    let project = sample_project();
    let sim: Vec<_> = project
        .files(FileType::VhdlSourceFile, Some("sim_1".into()))
        .unwrap()
        .map(|f| f.path().to_path_buf())
        .collect();
    assert_eq!(sim, vec![Path::new("sim/tb_top.vhd").to_path_buf()]);
}

#[test]
fn scoped_fileset_traversal_into_child() {
    let project = sample_project();
    let sources = project.file_set_by_name("sources_1").unwrap().id();
    let ip: Vec<_> = project
        .file_set_files(sources, FileType::Any, Some("ip".into()))
        .unwrap()
        .map(|f| f.file_type())
        .collect();
    assert_eq!(ip, vec![FileType::IpCoreInstantiationFile]);

    let err = project
        .file_set_files(sources, FileType::Any, Some("constrs_1".into()))
        .err()
        .unwrap();
    let message = err.to_string();
    assert!(message.contains("constrs_1"));
    assert!(message.contains("sources_1"));
}

#[test]
fn every_attached_file_reports_the_project() {
    let project = sample_project();
    for file in project.files(FileType::Any, None).unwrap() {
        assert_eq!(project.file_project(file.id()), Some(project.id()));
    }
}

#[test]
fn default_fileset_invariants() {
    let mut project = sample_project();
    assert_eq!(project.default_file_set().name(), DEFAULT_FILE_SET_NAME);
    assert!(project.file_sets().count() >= 1);

    assert!(project.set_default_file_set("missing").is_err());
    assert_eq!(project.default_file_set().name(), DEFAULT_FILE_SET_NAME);

    project.set_default_file_set("sim_1").unwrap();
    let tb = project.new_detached_file("sim/tb_uart.vhd", FileKind::vhdl(VhdlVersion::Vhdl93));
    project.add_file(tb).unwrap();
    let sim: Vec<_> = project
        .files(FileType::Any, Some("sim_1".into()))
        .unwrap()
        .map(|f| f.id())
        .collect();
    assert_eq!(sim.last(), Some(&tb));

    assert!(matches!(
        project.add_file(tb),
        Err(ModelError::FileAlreadyAttached { .. })
    ));
}

#[test]
fn library_overlay_is_independent_of_filesets() {
    let mut project = sample_project();
    let work = project.vhdl_library_or_insert("work");
    let vhdl: Vec<_> = project
        .files(FileType::VhdlSourceFile, None)
        .unwrap()
        .map(|f| f.id())
        .collect();
    for file in &vhdl {
        project.vhdl_library_add_file(work, *file).unwrap();
    }
    let library = project.vhdl_library_by_name("work").unwrap();
    assert_eq!(library.files(), vhdl.as_slice());
    assert_eq!(paths(&project, FileType::Any).len(), 5);
}

#[test]
fn absolute_paths_resolve_against_root() {
    let project = sample_project();
    let top = project
        .files(FileType::VhdlSourceFile, None)
        .unwrap()
        .next()
        .unwrap()
        .id();
    assert_eq!(
        project.absolute_path(top).unwrap(),
        Path::new("/work/blinky/src/top.vhd")
    );
}
