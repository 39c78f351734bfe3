// Case conversions offered to template authors, e.g. `{{ project_name | pascal_case }}`
pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case,
    train::to_train_case,
};
