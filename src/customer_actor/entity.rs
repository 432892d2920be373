use garde::Validate;

use crate::actor_framework::Entity;
use crate::domain::{describe_report, Customer, CustomerCreate, CustomerPatch};
use crate::store::CUSTOMERS;

impl Entity for Customer {
    type CreatePayload = CustomerCreate;
    type Patch = CustomerPatch;
    type Action = ();
    type ActionResult = ();

    const COLLECTION: &'static str = CUSTOMERS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, payload: CustomerCreate) -> Result<Self, String> {
        payload.validate().map_err(|r| describe_report(&r))?;
        Ok(Self {
            id,
            name: payload.name,
            surname: payload.surname,
            email: payload.email,
            phone: payload.phone,
            birth_date: payload.birth_date,
            college: payload.college,
            course: payload.course,
            period: payload.period,
            enrollment: payload.enrollment,
            photo_url: payload.photo_url,
            ..Self::default()
        })
    }

    fn on_update(&mut self, patch: CustomerPatch) -> Result<(), String> {
        patch.validate().map_err(|r| describe_report(&r))?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(surname) = patch.surname {
            self.surname = surname;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(college) = patch.college {
            self.college = college;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(enrollment) = patch.enrollment {
            self.enrollment = enrollment;
        }
        if let Some(photo_url) = patch.photo_url {
            self.photo_url = photo_url;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CustomerCreate {
        CustomerCreate {
            name: "Ana".into(),
            surname: "Souza".into(),
            email: "ana@example.com".into(),
            phone: "61987654321".into(),
            birth_date: "1990-01-01".into(),
            college: "UnB".into(),
            course: "Direito".into(),
            period: "3".into(),
            enrollment: "2023001".into(),
            photo_url: "https://example.com/ana.png".into(),
        }
    }

    #[test]
    fn test_from_create_validates() {
        let customer = Customer::from_create("c1".into(), payload()).unwrap();
        assert_eq!(customer.id, "c1");
        assert_eq!(customer.name, "Ana");

        let mut bad = payload();
        bad.email = "ana".into();
        let err = Customer::from_create("c2".into(), bad).unwrap_err();
        assert!(err.contains("email"));
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let mut customer = Customer::from_create("c1".into(), payload()).unwrap();
        customer
            .on_update(CustomerPatch {
                phone: Some("6133334444".into()),
                ..CustomerPatch::default()
            })
            .unwrap();

        assert_eq!(customer.phone, "6133334444");
        assert_eq!(customer.surname, "Souza");
    }
}
