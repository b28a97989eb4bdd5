use std::fmt;

use crate::models::{InsertContact, InsertPartnership};

/// One violated rule, named by the JSON field it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every rule an insert payload violated; empty is never constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

fn check(
    errors: &mut Vec<FieldError>,
    ok: bool,
    field: &'static str,
    message: &'static str,
) {
    if !ok {
        errors.push(FieldError { field, message });
    }
}

/// Rough RFC-5322 shape: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not our problem.
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) || value.contains("..") {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && tld.len() >= 2
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

impl InsertContact {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        check(
            &mut errors,
            self.name.chars().count() >= 2,
            "name",
            "Name must be at least 2 characters",
        );
        check(
            &mut errors,
            is_valid_email(&self.email),
            "email",
            "Invalid email address",
        );
        check(
            &mut errors,
            self.message.chars().count() >= 10,
            "message",
            "Message must be at least 10 characters",
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

impl InsertPartnership {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        check(
            &mut errors,
            self.company_name.chars().count() >= 2,
            "companyName",
            "Company name is required",
        );
        check(
            &mut errors,
            self.contact_name.chars().count() >= 2,
            "contactName",
            "Contact name is required",
        );
        check(
            &mut errors,
            is_valid_email(&self.email),
            "email",
            "Invalid email address",
        );
        check(
            &mut errors,
            self.phone.chars().count() >= 8,
            "phone",
            "Valid phone number is required",
        );
        check(
            &mut errors,
            self.message.chars().count() >= 20,
            "message",
            "Please provide more details about your partnership interest",
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{InsertContact, InsertPartnership};

    fn contact() -> InsertContact {
        InsertContact {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            phone: None,
            message: "Interested in the penthouse".to_string(),
            property_interest: None,
        }
    }

    fn partnership() -> InsertPartnership {
        InsertPartnership {
            company_name: "Acme Stays".to_string(),
            contact_name: "Sam Doe".to_string(),
            email: "sam@acme.example".to_string(),
            phone: "+20123456789".to_string(),
            message: "We operate twelve furnished buildings in Cairo".to_string(),
        }
    }

    #[test]
    fn valid_contact_passes() {
        assert!(contact().validate().is_ok());
    }

    #[test]
    fn two_char_name_is_enough_but_bad_email_is_named() {
        let mut c = contact();
        c.email = "not-an-email".to_string();
        let errors = c.validate().unwrap_err();
        assert_eq!(errors.field_names(), vec!["email"]);
    }

    #[test]
    fn contact_message_boundary() {
        let mut c = contact();
        c.message = "123456789".to_string(); // 9 chars
        assert!(c.validate().is_err());
        c.message = "1234567890".to_string(); // 10 chars
        assert!(c.validate().is_ok());
    }

    #[test]
    fn contact_collects_every_failing_field() {
        let c = InsertContact {
            name: "J".to_string(),
            email: "nope".to_string(),
            phone: None,
            message: "short".to_string(),
            property_interest: None,
        };
        let errors = c.validate().unwrap_err();
        assert_eq!(errors.field_names(), vec!["name", "email", "message"]);
        let text = errors.to_string();
        assert!(text.contains("Invalid email address"));
        assert!(text.contains("Name must be at least 2 characters"));
    }

    #[test]
    fn partnership_message_boundary() {
        let mut p = partnership();
        p.message = "a".repeat(19);
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.field_names(), vec!["message"]);
        p.message = "a".repeat(20);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn partnership_phone_minimum() {
        let mut p = partnership();
        p.phone = "1234567".to_string();
        assert!(p.validate().is_err());
        p.phone = "12345678".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn email_shapes() {
        let mut c = contact();
        for bad in ["plain", "@nolocal.com", "two@@ats.com", "no@dot", "sp ace@x.com"] {
            c.email = bad.to_string();
            assert!(c.validate().is_err(), "{bad} should fail");
        }
        for good in ["a@b.co", "first.last@sub.domain.org"] {
            c.email = good.to_string();
            assert!(c.validate().is_ok(), "{good} should pass");
        }
    }
}
