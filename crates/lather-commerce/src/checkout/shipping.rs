//! Shipping details and validation.

/// The shipping form collected in checkout step 1.
///
/// All six fields are required; values are validated after trimming
/// surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetails {
    /// Recipient's full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal PIN code.
    pub pin: String,
}

impl ShippingDetails {
    /// The required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<ShippingField> {
        ShippingField::ALL
            .iter()
            .filter(|field| self.value_of(**field).trim().is_empty())
            .copied()
            .collect()
    }

    /// Check if every required field is filled.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Review-step contact line: name and phone.
    pub fn contact_line(&self) -> String {
        format!("{} \u{2014} {}", self.name.trim(), self.phone.trim())
    }

    /// Review-step address line: street, city, state and PIN.
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.pin.trim()
        )
    }

    fn value_of(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::Name => &self.name,
            ShippingField::Phone => &self.phone,
            ShippingField::Address => &self.address,
            ShippingField::City => &self.city,
            ShippingField::State => &self.state,
            ShippingField::Pin => &self.pin,
        }
    }
}

/// One of the required shipping form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingField {
    Name,
    Phone,
    Address,
    City,
    State,
    Pin,
}

impl ShippingField {
    /// All required fields, in form order.
    pub const ALL: [ShippingField; 6] = [
        ShippingField::Name,
        ShippingField::Phone,
        ShippingField::Address,
        ShippingField::City,
        ShippingField::State,
        ShippingField::Pin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingField::Name => "name",
            ShippingField::Phone => "phone",
            ShippingField::Address => "address",
            ShippingField::City => "city",
            ShippingField::State => "state",
            ShippingField::Pin => "pin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingField::Name => "Full Name",
            ShippingField::Phone => "Phone Number",
            ShippingField::Address => "Address",
            ShippingField::City => "City",
            ShippingField::State => "State",
            ShippingField::Pin => "PIN Code",
        }
    }
}
