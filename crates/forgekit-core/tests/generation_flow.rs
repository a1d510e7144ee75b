//! End-to-end generation flow tests for forgekit-core.

use std::path::PathBuf;
use std::sync::Arc;

use forgekit_adapters::{
    LocalFilesystem, RecordingPublisher, SwappableMetadataProvider, TempDirFactory,
};
use forgekit_core::prelude::*;

fn catalog() -> MetadataSnapshot {
    MetadataSnapshot::builder()
        .group(
            "web",
            [
                DependencyEntry::new("web", "web").with_facet("web"),
                DependencyEntry::new("security", "web").with_version("1.4.2"),
            ],
        )
        .group(
            "build",
            [DependencyEntry::new("native", "build").with_facet("scripted")],
        )
        .default_dependency("web")
        .build()
        .unwrap()
}

struct Harness {
    generator: ProjectGenerator,
    publisher: Arc<RecordingPublisher>,
    _workdir: tempfile::TempDir,
}

fn harness() -> Harness {
    let workdir = tempfile::tempdir().unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let generator = ProjectGenerator::builder()
        .metadata_provider(Arc::new(SwappableMetadataProvider::new(catalog())))
        .event_publisher(Arc::clone(&publisher) as Arc<dyn EventPublisher>)
        .directory_factory(Arc::new(TempDirFactory::new(workdir.path())))
        .filesystem(Box::new(LocalFilesystem::new()))
        .build()
        .unwrap();
    Harness {
        generator,
        publisher,
        _workdir: workdir,
    }
}

#[test]
fn full_project_generation_writes_descriptor_and_skeleton() {
    let h = harness();
    let raw = RawRequest::new("manifest-project")
        .named("petstore")
        .dependency("web");

    let root = h.generator.generate_project(raw).unwrap();

    let descriptor = std::fs::read_to_string(root.join("project.toml")).unwrap();
    assert!(descriptor.contains("name = \"petstore\""));
    assert!(descriptor.contains("web = { group = \"web\", version = \"*\" }"));
    assert!(root.join("src").is_dir());
    assert!(root.join("src/resources").is_dir());
    assert!(root.join("tests").is_dir());
    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("petstore"));
    assert!(readme.contains("project.toml"));

    let outcomes = h.publisher.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_success());
    assert_eq!(outcomes[0].request().name, "petstore");
}

#[test]
fn buildfile_descriptor_renders_without_touching_disk() {
    let h = harness();
    let raw = RawRequest::new("buildfile-build")
        .named("petstore")
        .dependency("security");

    let bytes = h.generator.generate_buildfile(raw).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("dependencies {"));
    assert!(text.contains("version \"1.4.2\""));

    assert_eq!(h.publisher.len(), 1);
}

#[test]
fn unknown_dependency_fails_before_any_context_opens() {
    let h = harness();
    let raw = RawRequest::new("manifest-project").dependency("does-not-exist");

    let result = h.generator.generate_project(raw);
    assert_eq!(
        result,
        Err(ForgekitError::Resolve(
            ResolveError::UnresolvableDependency {
                id: "does-not-exist".into()
            }
        ))
    );

    // Resolution failed, so no attempt started and nothing was published.
    assert!(h.publisher.is_empty());
}

#[test]
fn scripted_dependency_is_rejected_for_the_manifest_dialect() {
    let h = harness();
    let raw = RawRequest::new("manifest-project").dependency("native");

    let result = h.generator.generate_project(raw);
    assert!(matches!(
        result,
        Err(ForgekitError::Resolve(ResolveError::IncompatibleRequest { .. }))
    ));
    assert!(h.publisher.is_empty());

    // The same dependency is fine in the buildfile dialect.
    let raw = RawRequest::new("buildfile-project").dependency("native");
    h.generator.generate_project(raw).unwrap();
    assert_eq!(h.publisher.len(), 1);
}

#[test]
fn empty_request_falls_back_to_catalog_defaults() {
    let h = harness();
    let raw = RawRequest::new("manifest-build");

    let bytes = h.generator.generate_manifest(raw).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("name = \"demo\""));
    assert!(text.contains("web = { group = \"web\", version = \"*\" }"));
}

mockall::mock! {
    Directories {}

    impl DirectoryFactory for Directories {
        fn allocate(&self, request: &ResolvedRequest) -> Result<PathBuf, GenerationError>;
    }
}

#[test]
fn allocation_failure_publishes_exactly_one_failed_outcome() {
    let publisher = Arc::new(RecordingPublisher::new());

    let mut directories = MockDirectories::new();
    directories
        .expect_allocate()
        .times(1)
        .returning(|_| {
            Err(GenerationError::DirectoryAllocation {
                reason: "disk full".into(),
            })
        });

    let generator = ProjectGenerator::builder()
        .metadata_provider(Arc::new(SwappableMetadataProvider::new(catalog())))
        .event_publisher(Arc::clone(&publisher) as Arc<dyn EventPublisher>)
        .directory_factory(Arc::new(directories))
        .filesystem(Box::new(LocalFilesystem::new()))
        .build()
        .unwrap();

    let raw = RawRequest::new("manifest-project").named("doomed").dependency("web");
    let result = generator.generate_project(raw);

    let expected_cause = GenerationError::DirectoryAllocation {
        reason: "disk full".into(),
    };
    assert_eq!(result, Err(ForgekitError::Generation(expected_cause.clone())));

    // The context opened, so exactly one outcome is published, and the
    // outcome carries the same cause the caller got.
    let outcomes = publisher.outcomes();
    assert_eq!(outcomes.len(), 1);
    match &outcomes[0] {
        GenerationOutcome::Failed { request, cause } => {
            assert_eq!(request.name, "doomed");
            assert_eq!(cause, &expected_cause);
        }
        other => panic!("expected a failed outcome, got {other:?}"),
    }
}

struct FailingDirectories;

impl DirectoryFactory for FailingDirectories {
    fn allocate(&self, _request: &ResolvedRequest) -> Result<PathBuf, GenerationError> {
        Err(GenerationError::DirectoryAllocation {
            reason: "allocation refused".into(),
        })
    }
}

#[test]
fn concurrent_attempts_stay_isolated() {
    let h = harness();
    let generator = Arc::new(h.generator);

    let ok = {
        let generator = Arc::clone(&generator);
        std::thread::spawn(move || {
            generator.generate_project(
                RawRequest::new("manifest-project").named("alpha").dependency("web"),
            )
        })
    };
    // The second attempt fails inside its own open context: its directory
    // factory is substituted for one that refuses to allocate.
    let bad = {
        let generator = Arc::clone(&generator);
        std::thread::spawn(move || {
            let snapshot = generator.snapshot();
            let request = resolve(
                RawRequest::new("manifest-project").named("beta").dependency("web"),
                &snapshot,
            )
            .unwrap();
            generator.invoker().run(
                &request,
                snapshot,
                |config| config.directories = Arc::new(FailingDirectories),
                |context| context.directories.allocate(&request),
            )
        })
    };

    let ok_root = ok.join().unwrap().unwrap();
    assert!(ok_root.join("project.toml").is_file());
    assert_eq!(
        bad.join().unwrap(),
        Err(GenerationError::DirectoryAllocation {
            reason: "allocation refused".into()
        })
    );

    // Each attempt got its own outcome; the in-context failure of one did
    // not leak into the other's.
    let outcomes = h.publisher.outcomes();
    assert_eq!(outcomes.len(), 2);
    let generated: Vec<_> = outcomes.iter().filter(|o| o.is_success()).collect();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].request().name, "alpha");

    let failed = outcomes.iter().find(|o| !o.is_success()).unwrap();
    assert_eq!(failed.request().name, "beta");
    assert_eq!(
        failed.cause(),
        Some(&GenerationError::DirectoryAllocation {
            reason: "allocation refused".into()
        })
    );
}

#[test]
fn two_generations_get_distinct_roots() {
    let h = harness();
    let first = h
        .generator
        .generate_project(RawRequest::new("manifest-project").named("twin"))
        .unwrap();
    let second = h
        .generator
        .generate_project(RawRequest::new("manifest-project").named("twin"))
        .unwrap();

    assert_ne!(first, second);
    assert!(first.join("project.toml").is_file());
    assert!(second.join("project.toml").is_file());
    assert_eq!(h.publisher.len(), 2);
}
