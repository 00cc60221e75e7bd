//! End-to-end tests: host dump in, builder files out.

use std::{fs, process::Command};

use databuilder_gen::generator::{
  converter::{BuilderConfig, SetterStyle},
  metrics::GenerationWarning,
  orchestrator::{Orchestrator, OutputFormat},
};
use databuilder_host::HostDump;

const DUMP: &str = r#"{
  "declarations": [
    {
      "name": "TestStruct",
      "package": "com.lingkou.databuilder",
      "has_companion": true,
      "creator": { "companionable": true },
      "members": "[test1, test2, testMutableList, TestStruct(java.lang.String,int,java.util.List<java.lang.String>), component1(), component2(), component3(), Companion]",
      "markers": {
        "testMutableList": { "mutable": true }
      }
    },
    {
      "name": "Owner",
      "package": "com.lingkou.databuilder",
      "parameters": [
        { "name": "pet", "type": "com.lingkou.databuilder.animals.Animal", "has_default": true },
        { "name": "nickname", "type": "java.lang.String", "nullable": true, "has_default": true }
      ],
      "markers": {
        "pet": { "alias": { "target": "com.lingkou.databuilder.animals.Dog" } },
        "nickname": { "nullable": true }
      }
    },
    {
      "name": "Broken",
      "package": "com.lingkou.databuilder",
      "members": "[a, b, Broken(int)]"
    }
  ],
  "known_types": ["com.lingkou.databuilder.animals.Dog"]
}"#;

fn orchestrator(config: BuilderConfig) -> Orchestrator {
  Orchestrator::new(HostDump::from_json_str(DUMP).unwrap(), config, None).unwrap()
}

#[test]
fn test_member_listing_declaration_renders_full_builder() {
  let (files, stats) = orchestrator(BuilderConfig::default())
    .generate_files(OutputFormat::Kotlin, "dump.json")
    .unwrap();

  let file = files
    .iter()
    .find(|file| file.path.ends_with("TestStructExtension.kt"))
    .unwrap();
  assert_eq!(
    file.path.to_str().unwrap().replace('\\', "/"),
    "com/lingkou/databuilder/TestStructExtension.kt"
  );

  let code = &file.contents;
  assert!(code.starts_with("// Generated by databuilder-gen. Do not edit.\n// Source: dump.json\n"));
  assert!(code.contains("package com.lingkou.databuilder\n"));
  assert!(code.contains("fun TestStruct.Companion.builder(): TestStructBuilder = TestStructBuilder()\n"));
  assert!(code.contains("    private var test1: String = \"\"\n"));
  assert!(code.contains("    private var test2: Int = 0\n"));
  assert!(code.contains("    private lateinit var testMutableList: MutableList<String>\n"));
  assert!(code.contains(
    "    fun setTestMutableList(testMutableList: MutableList<String>): TestStructBuilder = \
     apply { this.testMutableList = testMutableList }\n"
  ));
  assert!(code.contains(
    "        return TestStruct(test1 = this.test1, test2 = this.test2, testMutableList = this.testMutableList)\n"
  ));

  assert_eq!(stats.declarations_seen, 3);
  assert_eq!(stats.builders_generated, 2);
  assert_eq!(stats.skipped_count(), 1);
}

#[test]
fn test_alias_and_optional_fields_branch_on_presence() {
  let (files, _) = orchestrator(BuilderConfig::default())
    .generate_files(OutputFormat::Kotlin, "dump.json")
    .unwrap();

  let code = &files
    .iter()
    .find(|file| file.path.ends_with("OwnerExtension.kt"))
    .unwrap()
    .contents;

  assert!(code.contains("import com.lingkou.databuilder.animals.Dog\n"));
  assert!(code.contains("    private lateinit var pet: Dog\n"));
  assert!(code.contains("    private var nickname: String? = null\n"));
  assert!(!code.contains("Owner.Companion"));

  let expected_when = "\
        return when {
            this::pet.isInitialized && nickname != null -> Owner(pet = this.pet, nickname = this.nickname)
            this::pet.isInitialized -> Owner(pet = this.pet)
            nickname != null -> Owner(nickname = this.nickname)
            else -> Owner()
        }
";
  assert!(code.contains(expected_when), "unexpected build body:\n{code}");
}

#[test]
fn test_failed_declaration_is_reported_not_fatal() {
  let (modules, stats) = orchestrator(BuilderConfig::default()).generate();

  assert_eq!(modules.len(), 2);
  assert!(modules.iter().all(|module| module.builder.name != "BrokenBuilder"));

  let skipped = stats
    .warnings
    .iter()
    .filter(|warning| warning.is_skipped_item())
    .collect::<Vec<_>>();
  assert_eq!(skipped.len(), 1);
  assert!(matches!(
    skipped[0],
    GenerationWarning::DeclarationSkipped { declaration, .. } if declaration == "Broken"
  ));
}

#[test]
fn test_with_setter_style_and_custom_factory() {
  let config = BuilderConfig::builder()
    .setter_style(SetterStyle::With)
    .factory_name("newBuilder")
    .build();
  let (files, _) = orchestrator(config)
    .generate_files(OutputFormat::Kotlin, "dump.json")
    .unwrap();

  let code = &files[0].contents;
  assert!(code.contains("fun TestStruct.Companion.newBuilder(): TestStructBuilder = TestStructBuilder()\n"));
  assert!(code.contains("    fun withTest1(test1: String): TestStructBuilder = apply { this.test1 = test1 }\n"));
}

#[test]
fn test_model_format_is_json() {
  let (files, _) = orchestrator(BuilderConfig::default())
    .generate_files(OutputFormat::Model, "dump.json")
    .unwrap();

  let file = &files[0];
  assert!(file.path.ends_with("TestStructExtension.json"));
  let model: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
  assert_eq!(model["package"], "com.lingkou.databuilder");
  assert_eq!(model["builder"]["name"], "TestStructBuilder");
  assert_eq!(model["builder"]["properties"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_generate_writes_files() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = temp_dir.path().join("dump.json");
  let output = temp_dir.path().join("generated");
  fs::write(&input, DUMP).unwrap();

  let status = Command::new(env!("CARGO_BIN_EXE_databuilder-gen"))
    .args(["generate", "-q", "--color", "never", "-i"])
    .arg(&input)
    .arg("-o")
    .arg(&output)
    .args(["--only", "TestStruct"])
    .status()
    .unwrap();
  assert!(status.success(), "generation failed");

  let package_dir = output.join("com").join("lingkou").join("databuilder");
  let code = fs::read_to_string(package_dir.join("TestStructExtension.kt")).unwrap();
  assert!(code.contains("class TestStructBuilder {\n"));
  assert!(!package_dir.join("OwnerExtension.kt").exists());
}

#[test]
fn test_cli_rejects_unknown_only_name() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = temp_dir.path().join("dump.json");
  fs::write(&input, DUMP).unwrap();

  let output = Command::new(env!("CARGO_BIN_EXE_databuilder-gen"))
    .args(["generate", "-q", "--color", "never", "-i"])
    .arg(&input)
    .arg("-o")
    .arg(temp_dir.path().join("out"))
    .args(["--only", "Ghost"])
    .output()
    .unwrap();
  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("Ghost"));
}
