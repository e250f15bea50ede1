#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

// A validated submission, handed off to whatever collaborator delivers it.
// The repository itself only logs the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub submitted: bool,
}

impl ContactForm {
    pub fn field_changed(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
        self.submitted = false;
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }

    pub fn submit(&mut self) -> Option<ContactRequest> {
        if !self.is_valid() {
            return None;
        }

        let request = ContactRequest {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            company: std::mem::take(&mut self.company),
            message: std::mem::take(&mut self.message),
        };
        self.submitted = true;

        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.field_changed(ContactField::Name, "Teddy O'Brien".to_owned());
        form.field_changed(ContactField::Email, "teddy@avim.example".to_owned());
        form.field_changed(ContactField::Company, "AVIM".to_owned());
        form.field_changed(ContactField::Message, "Let's talk depots.".to_owned());
        form
    }

    #[test]
    fn submit_clears_the_form_and_yields_a_request() {
        let mut form = filled_form();

        let request = form.submit().unwrap();
        assert_eq!(request.name, "Teddy O'Brien");
        assert_eq!(request.company, "AVIM");

        assert!(form.submitted);
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn invalid_forms_do_not_submit() {
        let mut form = ContactForm::default();
        assert!(form.submit().is_none());

        form.field_changed(ContactField::Name, "Jane".to_owned());
        form.field_changed(ContactField::Email, "not-an-address".to_owned());
        form.field_changed(ContactField::Message, "hello".to_owned());
        assert!(form.submit().is_none());
        assert!(!form.submitted);
    }

    #[test]
    fn editing_after_submit_resets_the_submitted_flag() {
        let mut form = filled_form();
        form.submit().unwrap();
        assert!(form.submitted);

        form.field_changed(ContactField::Name, "J".to_owned());
        assert!(!form.submitted);
    }
}
