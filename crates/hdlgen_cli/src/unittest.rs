//! `hdlgen unittest` — MyHDL unit-test scaffold generation.

use crate::pipeline::{extract_interface, write_output};
use crate::{GenArgs, GlobalArgs};

/// Runs the `hdlgen unittest` command.
///
/// Extracts the module interface and renders the Python unittest scaffold
/// to stdout or `--output`. Returns exit code 0 on success.
pub fn run(args: &GenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (interface, _config) = extract_interface(args, global)?;

    if !global.quiet {
        eprintln!(
            "   Generating unit-test scaffold for `{}` ({} port(s), {} parameter(s))",
            interface.name,
            interface.ports.len(),
            interface.params.len()
        );
    }

    let text = hdlgen_emit::unittest::generate(&interface);
    write_output(&text, args.output.as_deref(), "unit-test scaffold", global)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn requested_module_is_honored() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("fake-tagger");
        // Two modules in one file; the command must pick the requested one.
        let payload = "alu\tchip.v\t1;\" module alu\n\
             op\tchip.v\t2;\" port op\t\tmodule:alu\n\
             regfile\tchip.v\t9;\" module regfile\n\
             waddr\tchip.v\t10;\" port waddr\t\tmodule:regfile\n";
        std::fs::write(&script, format!("#!/bin/sh\nprintf '%s' '{payload}'\n")).unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        std::fs::write(
            tmp.path().join("hdlgen.toml"),
            format!("[tags]\nctags = \"{}\"\n", script.display()),
        )
        .unwrap();
        let source = tmp.path().join("chip.v");
        std::fs::write(&source, "module alu; endmodule\nmodule regfile; endmodule\n").unwrap();

        let out_path = tmp.path().join("test_regfile.py");
        let args = GenArgs {
            file: source.to_str().unwrap().to_string(),
            module: Some("regfile".to_string()),
            output: Some(out_path.to_str().unwrap().to_string()),
            scheme: None,
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        };

        assert_eq!(run(&args, &global).unwrap(), 0);

        let text = std::fs::read_to_string(&out_path).unwrap();
        assert!(text.contains("class Testregfile(unittest.TestCase):"));
        assert!(text.contains("ports = Ports(waddr)"));
        assert!(!text.contains("alu"));
    }

    #[cfg(unix)]
    #[test]
    fn ambiguous_without_request_fails() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("fake-tagger");
        let payload = "alu\tchip.v\t1;\" module alu\n\
             regfile\tchip.v\t9;\" module regfile\n";
        std::fs::write(&script, format!("#!/bin/sh\nprintf '%s' '{payload}'\n")).unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        std::fs::write(
            tmp.path().join("hdlgen.toml"),
            format!("[tags]\nctags = \"{}\"\n", script.display()),
        )
        .unwrap();
        let source = tmp.path().join("chip.v");
        std::fs::write(&source, "module alu; endmodule\nmodule regfile; endmodule\n").unwrap();

        let args = GenArgs {
            file: source.to_str().unwrap().to_string(),
            module: None,
            output: None,
            scheme: None,
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        };

        let err = run(&args, &global).unwrap_err();
        assert!(format!("{err}").contains("multiple modules found: alu, regfile"));
    }
}
