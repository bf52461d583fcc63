use std::any::type_name;

pub fn pretty_type_name<T>() -> &'static str {
    let name = type_name::<T>();

    name.rsplit("::").next().unwrap_or(name)
}
