//! Case command - Convert modifier names between casings

use clap::{Args, ValueEnum};
use modiste::carton::{camelize, hyphenate};

#[derive(Clone, Copy, ValueEnum)]
pub enum CaseTarget {
    /// kebab-case to camelCase (class name to state property)
    Camel,
    /// camelCase to kebab-case (state property to class name)
    Kebab,
}

#[derive(Args)]
pub struct CaseArgs {
    /// Target casing
    #[arg(value_enum)]
    pub to: CaseTarget,

    /// Names to convert
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub fn run(args: CaseArgs) {
    for name in &args.names {
        let converted = match args.to {
            CaseTarget::Camel => camelize(name),
            CaseTarget::Kebab => hyphenate(name),
        };
        println!("{}", converted);
    }
}
