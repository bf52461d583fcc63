use std::collections::BTreeMap;

pub fn get_namespace_labels() -> BTreeMap<String, String> {
    get_component_labels("namespace")
}

pub fn get_cronjob_labels() -> BTreeMap<String, String> {
    get_component_labels("cronjob")
}

fn get_component_labels(component: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("app.kubernetes.io/name".to_owned(), "myapp".to_owned()),
        ("app.kubernetes.io/component".to_owned(), component.to_owned()),
        ("app.kubernetes.io/managed-by".to_owned(), "myapp-operator".to_owned()),
    ])
}
