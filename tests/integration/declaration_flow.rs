use std::cell::Cell;
use std::rc::Rc;

use depbind::binding::{DependencyAdder, DependencyModifier};
use depbind::coordinate::Coordinate;
use depbind::dependency::{
    DefaultDependencyFactory, Dependency, ExternalModuleDependency, FileSet, ModuleDependency,
};
use depbind::provider::Provider;
use depbind::test_utils::{CatalogEntry, RecordingCollection};

fn adder() -> DependencyAdder<DefaultDependencyFactory, RecordingCollection> {
    DependencyAdder::new(DefaultDependencyFactory, RecordingCollection::new())
}

#[test]
fn mixed_notation_declaration_block() {
    crate::init_tracing();
    let mut adder = adder();

    // The shapes a dependencies block typically mixes: strings, maps,
    // files, catalog references and lazily-computed values.
    adder.add("org.example:core:1.4").unwrap();
    adder.add_with("org.example:http:2.0", |dependency| {
        dependency.set_transitive(false);
    }).unwrap();
    adder.add_files(FileSet::new(["libs/vendored.jar"]));
    adder.add_module(CatalogEntry(Coordinate::full("com.google.guava", "guava", "33.0")));
    adder.add_lazy(Provider::new(|| {
        ExternalModuleDependency::new(Coordinate::full("org.example", "generated", "0.1"))
    }));

    let mut collection = adder.into_collection();
    assert_eq!(collection.realized().len(), 3);
    assert_eq!(collection.pending_len(), 2);

    let resolved = collection.resolve_pending();
    let names: Vec<String> = collection
        .realized()
        .iter()
        .chain(resolved.iter())
        .map(|dependency| dependency.display_name())
        .collect();
    assert_eq!(
        names,
        [
            "org.example:core:1.4",
            "org.example:http:2.0",
            "files[1]",
            "com.google.guava:guava:33.0",
            "org.example:generated:0.1",
        ]
    );
}

#[test]
fn each_add_call_appends_exactly_one_entry() {
    let mut adder = adder();
    adder.add("org:lib:1.0").unwrap();
    assert_eq!(adder.collection().len(), 1);
    adder.add("org:lib:1.0").unwrap();
    // No deduping: the same notation declared twice appends twice.
    assert_eq!(adder.collection().len(), 2);
}

#[test]
fn modifying_leaves_the_collection_untouched() {
    let mut adder = adder();
    adder.add("org:lib:1.0").unwrap();

    let modifier = DependencyModifier::identity(DefaultDependencyFactory);
    let step_ran = Rc::new(Cell::new(false));
    let seen = Rc::clone(&step_ran);
    let result = modifier.modify_with(
        ExternalModuleDependency::new(Coordinate::full("org", "standalone", "2.0")),
        move |dependency| {
            seen.set(true);
            dependency.because("returned to the caller, not registered");
        },
    );

    assert!(step_ran.get());
    assert_eq!(result.reason(), Some("returned to the caller, not registered"));
    assert_eq!(adder.collection().len(), 1);
}

#[test]
fn failed_declarations_leave_no_trace() {
    let mut adder = adder();
    adder.add("org:lib:1.0").unwrap();
    assert!(adder.add("too:many:segments:here").is_err());
    adder.add("org:after:2.0").unwrap();

    let names: Vec<String> =
        adder.collection().realized().iter().map(|d| d.display_name()).collect();
    assert_eq!(names, ["org:lib:1.0", "org:after:2.0"]);
}

#[test]
fn deferred_configuration_composes_with_modifier_transformations() {
    let modifier = DependencyModifier::new(DefaultDependencyFactory, |dependency| {
        dependency.set_transitive(false);
    });

    let mut adder = adder();
    let pending = modifier.modify_lazy_with(
        Provider::of(ExternalModuleDependency::new(Coordinate::full("org", "lib", "1.0"))),
        |dependency| dependency.because("modified then registered"),
    );
    adder.add_lazy(pending);

    let resolved = adder.into_collection().resolve_pending();
    let module = resolved[0]
        .as_any()
        .downcast_ref::<ExternalModuleDependency>()
        .unwrap();
    assert!(!module.is_transitive());
    assert_eq!(module.reason(), Some("modified then registered"));
}
