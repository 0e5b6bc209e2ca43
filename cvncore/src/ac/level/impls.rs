use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Level;

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Level {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blocked" => Ok(Level::Blocked),
            "View" => Ok(Level::View),
            "Comment" => Ok(Level::Comment),
            "Access" => Ok(Level::Access),
            "Edit" => Ok(Level::Edit),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::Level;
    use crate::error::ValueError;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        // sample of standard conversions
        assert_eq!(Level::View.to_string(), "View");
        assert_eq!(Level::View, Level::from_str("View")?);
        assert_eq!(Level::Edit.to_string(), "Edit");
        assert_eq!(Level::Edit, Level::from_str("Edit")?);

        // error conversion
        assert!(matches!(
            Level::from_str("no_such_level")
                .expect_err("should be an error"),
            ValueError::Unsupported(s) if s == "no_such_level".to_string(),
        ));

        // infallable conversion
        assert_eq!(
            Level::from_str("no_such_level")
                .unwrap_or_default(),
            Level::Blocked,
        );
        Ok(())
    }

    #[test]
    fn ordinals() {
        assert_eq!(i32::from(Level::Blocked), 0);
        assert_eq!(i32::from(Level::View), 1);
        assert_eq!(i32::from(Level::Comment), 2);
        assert_eq!(i32::from(Level::Access), 3);
        assert_eq!(i32::from(Level::Edit), 4);

        assert_eq!(Level::from(2), Level::Comment);
        // out of range ordinals convert to the denying tier
        assert_eq!(Level::from(-1), Level::Blocked);
        assert_eq!(Level::from(99), Level::Blocked);
    }

    #[test]
    fn ordering() {
        assert!(Level::Blocked < Level::View);
        assert!(Level::View < Level::Comment);
        assert!(Level::Comment < Level::Access);
        assert!(Level::Access < Level::Edit);
    }

    #[test]
    fn serde_ordinal() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&Level::Comment)?, "2");
        assert_eq!(serde_json::from_str::<Level>("4")?, Level::Edit);
        // unknown ordinal from an upstream schema bump
        assert_eq!(serde_json::from_str::<Level>("17")?, Level::Blocked);
        Ok(())
    }
}
