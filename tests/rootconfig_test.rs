use std::fs;
use std::path::Path;

use ddd_skeleton::rootconfig::materialize_root_config;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_template_root(root: &Path) {
    write_file(&root.join("package.json"), "{\n  \"name\": \"ddd-service\"\n}\n");
    write_file(&root.join("README.md"), "# DDD Service\n");
    write_file(&root.join("tsconfig.json"), "{}\n");
    write_file(&root.join(".env"), "DB_DRIVER=memory\n");

    write_file(
        &root.join("contexts/main.ts"),
        "import { ApplicationCore } from \"./ApplicationCore\";\n\
         ApplicationCore.initialize();\n",
    );
    write_file(
        &root.join("contexts/ApplicationCore.ts"),
        "import { RepositoryFactory } from './template/infrastructure/factories/RepositoryFactory';\n\
         import { databaseConfig } from './template/config/databaseConfig';\n\
         export class ApplicationCore {}\n",
    );
    write_file(
        &root.join("contexts/ControllerDependencyInjector.ts"),
        "import { TemplateService } from './template/domain/services/TemplateService';\n\
         import { TemplateController } from './template/presentation/http/TemplateController';\n\
         export class ControllerDependencyInjector {\n\
           static setupController() {\n\
             return new TemplateController(new TemplateService());\n\
           }\n\
         }\n",
    );
}

#[test]
fn test_singleton_files_copied_once() {
    let temp_dir = TempDir::new().unwrap();
    let template_root = temp_dir.path().join("templates");
    let project_root = temp_dir.path().join("project");
    setup_template_root(&template_root);
    fs::create_dir_all(&project_root).unwrap();

    materialize_root_config(&template_root, &project_root, "billing");

    for file in ["package.json", "README.md", "tsconfig.json", ".env"] {
        assert!(project_root.join(file).is_file(), "{} was not copied", file);
    }
}

#[test]
fn test_existing_singleton_file_is_never_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let template_root = temp_dir.path().join("templates");
    let project_root = temp_dir.path().join("project");
    setup_template_root(&template_root);
    write_file(&project_root.join("package.json"), "{ \"name\": \"mine\" }");

    materialize_root_config(&template_root, &project_root, "billing");

    // Byte-identical afterwards.
    let content = fs::read_to_string(project_root.join("package.json")).unwrap();
    assert_eq!(content, "{ \"name\": \"mine\" }");
    // Other singleton files still went through.
    assert!(project_root.join("README.md").is_file());
}

#[test_log::test]
fn test_missing_singleton_source_is_non_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let template_root = temp_dir.path().join("templates");
    let project_root = temp_dir.path().join("project");
    setup_template_root(&template_root);
    fs::remove_file(template_root.join("tsconfig.json")).unwrap();
    fs::create_dir_all(&project_root).unwrap();

    materialize_root_config(&template_root, &project_root, "billing");

    assert!(!project_root.join("tsconfig.json").exists());
    assert!(project_root.join("package.json").is_file());
    assert!(project_root.join(".env").is_file());
}

#[test]
fn test_entry_points_substituted_and_imports_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    let template_root = temp_dir.path().join("templates");
    let project_root = temp_dir.path().join("project");
    setup_template_root(&template_root);
    fs::create_dir_all(&project_root).unwrap();

    materialize_root_config(&template_root, &project_root, "billing");

    let injector = fs::read_to_string(
        project_root.join("contexts/ControllerDependencyInjector.ts"),
    )
    .unwrap();

    // Placeholder substitution ran over the whole content first, so the
    // trailing path segment carries the capitalized token while the
    // directory segment carries the raw lowercase identifier.
    assert!(injector.contains(
        "import {BillingService} from './billing/domain/services/BillingService'"
    ));
    assert!(injector.contains(
        "import {BillingController} from './billing/presentation/http/BillingController'"
    ));
    assert!(injector.contains("return new BillingController(new BillingService());"));
    assert!(!injector.contains("Template"));

    // Relative imports outside the template namespace are untouched.
    let core = fs::read_to_string(project_root.join("contexts/ApplicationCore.ts")).unwrap();
    assert!(core.contains(
        "import {RepositoryFactory} from './billing/infrastructure/factories/RepositoryFactory'"
    ));
    let main = fs::read_to_string(project_root.join("contexts/main.ts")).unwrap();
    assert!(main.contains("import { ApplicationCore } from \"./ApplicationCore\""));
}

#[test]
fn test_entry_point_name_substitution() {
    let temp_dir = TempDir::new().unwrap();
    let template_root = temp_dir.path().join("templates");
    let project_root = temp_dir.path().join("project");
    setup_template_root(&template_root);
    write_file(
        &template_root.join("contexts/TemplateBootstrap.ts"),
        "export const bootstrap = () => new Template();\n",
    );
    fs::create_dir_all(&project_root).unwrap();

    materialize_root_config(&template_root, &project_root, "billing");

    // Entry-point file names go through the same substitution rule; the
    // fixed list does not include extra files, so only the three known
    // names land in the project.
    assert!(project_root.join("contexts/main.ts").is_file());
    assert!(project_root.join("contexts/ApplicationCore.ts").is_file());
    assert!(!project_root.join("contexts/BillingBootstrap.ts").exists());
}

#[test]
fn test_missing_entry_point_is_non_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let template_root = temp_dir.path().join("templates");
    let project_root = temp_dir.path().join("project");
    setup_template_root(&template_root);
    fs::remove_file(template_root.join("contexts/main.ts")).unwrap();
    fs::create_dir_all(&project_root).unwrap();

    materialize_root_config(&template_root, &project_root, "billing");

    assert!(!project_root.join("contexts/main.ts").exists());
    assert!(project_root.join("contexts/ApplicationCore.ts").is_file());
}
