use catalog::availability::Availability;
use clap::ValueEnum;
use i18n::Language;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "lower")]
pub enum LanguageArg {
    En,
    Cn,
    Es,
    De,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::En => Self::En,
            LanguageArg::Cn => Self::Cn,
            LanguageArg::Es => Self::Es,
            LanguageArg::De => Self::De,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "kebab-case")]
pub enum AvailabilityArg {
    InStock,
    LeadTime,
    Obsolete,
}

impl From<AvailabilityArg> for Availability {
    fn from(value: AvailabilityArg) -> Self {
        match value {
            AvailabilityArg::InStock => Self::InStock,
            AvailabilityArg::LeadTime => Self::LeadTime,
            AvailabilityArg::Obsolete => Self::Obsolete,
        }
    }
}
