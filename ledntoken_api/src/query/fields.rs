//! Enumerations for the columns the accounts endpoint can filter and sort on.

use std::fmt;
use std::str::FromStr;

/// Record attribute eligible for `{field}_like` substring search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterField {
    #[default]
    FirstName,
    LastName,
    Country,
    Mfa,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::FirstName,
        FilterField::LastName,
        FilterField::Country,
        FilterField::Mfa,
    ];

    /// Wire key of the attribute, as it appears in the JSON records.
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::FirstName => "First Name",
            FilterField::LastName => "Last Name",
            FilterField::Country => "Country",
            FilterField::Mfa => "mfa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::FirstName => "First Name",
            FilterField::LastName => "Last Name",
            FilterField::Country => "Country",
            FilterField::Mfa => "Multi-factor Authentication Type",
        }
    }

    /// Name of the query parameter carrying a substring filter on this field.
    pub fn like_key(&self) -> String {
        format!("{}_like", self.key())
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterField {
    type Err = ();

    /// Accepts the wire key, the display label, or a kebab/snake-case alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(&['-', '_'][..], " ");
        match normalized.as_str() {
            "first name" | "first" | "firstname" => Ok(FilterField::FirstName),
            "last name" | "last" | "lastname" => Ok(FilterField::LastName),
            "country" => Ok(FilterField::Country),
            "mfa" | "multi factor authentication type" => Ok(FilterField::Mfa),
            _ => Err(()),
        }
    }
}

/// Column that can be sorted server-side via `_sort`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Amount,
    CreatedDate,
}

impl SortColumn {
    pub const ALL: [SortColumn; 2] = [SortColumn::Amount, SortColumn::CreatedDate];

    pub fn key(&self) -> &'static str {
        match self {
            SortColumn::Amount => "amt",
            SortColumn::CreatedDate => "createdDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Amount => "# of Ledn Tokens",
            SortColumn::CreatedDate => "Creation Date",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortColumn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amt" | "amount" | "tokens" => Ok(SortColumn::Amount),
            "createddate" | "created-date" | "created_date" | "created" => {
                Ok(SortColumn::CreatedDate)
            }
            _ => Err(()),
        }
    }
}

/// Number of records requested per page (`_limit`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    Ten = 10,
    TwentyFive = 25,
    Fifty = 50,
    Hundred = 100,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(&self) -> u32 {
        *self as u32
    }
}

impl TryFrom<u32> for PageSize {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_field_like_keys() {
        assert_eq!(FilterField::FirstName.like_key(), "First Name_like");
        assert_eq!(FilterField::Mfa.like_key(), "mfa_like");
    }

    #[test]
    fn filter_field_from_aliases() {
        assert_eq!("First Name".parse(), Ok(FilterField::FirstName));
        assert_eq!("last-name".parse(), Ok(FilterField::LastName));
        assert_eq!("COUNTRY".parse(), Ok(FilterField::Country));
        assert_eq!(
            "Multi-factor Authentication Type".parse(),
            Ok(FilterField::Mfa)
        );
        assert!("email".parse::<FilterField>().is_err());
    }

    #[test]
    fn sort_column_keys() {
        assert_eq!(SortColumn::Amount.key(), "amt");
        assert_eq!("createdDate".parse(), Ok(SortColumn::CreatedDate));
        assert!("dob".parse::<SortColumn>().is_err());
    }

    #[test]
    fn page_size_only_accepts_enumerated_values() {
        assert_eq!(PageSize::try_from(25), Ok(PageSize::TwentyFive));
        assert_eq!(PageSize::try_from(100), Ok(PageSize::Hundred));
        assert_eq!(PageSize::try_from(20), Err(20));
        assert_eq!(PageSize::default().get(), 10);
    }
}
