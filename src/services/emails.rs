//! Plain-text email bodies for marketplace notifications.
//!
//! Kept as free functions so the lifecycle manager can enqueue fully-rendered
//! messages and the dispatcher never needs to know about items or requests.

pub const KIND_OWNER_NEW_REQUEST: &str = "owner_new_request";
pub const KIND_REQUEST_APPROVED: &str = "request_approved";
pub const KIND_REQUEST_REJECTED: &str = "request_rejected";

pub struct OwnerNewRequest<'a> {
    pub owner_name: &'a str,
    pub item_title: &'a str,
    pub requester_name: &'a str,
    pub requester_email: &'a str,
    pub message: &'a str,
    pub preferred_contact: &'a str,
}

/// Email to the item owner when a new pickup request arrives
pub fn owner_new_request(input: &OwnerNewRequest<'_>) -> (String, String) {
    let subject = "New request for your item on ReuseLa".to_string();
    let body = format!(
        "Hi {owner},\n\n\
         Someone is interested in your item \"{title}\" on ReuseLa!\n\n\
         Requester Details:\n\
         - Name: {name}\n\
         - Email: {email}\n\
         - Preferred Contact: {contact}\n\n\
         Message:\n{message}\n\n\
         Please respond to {email} if you'd like to proceed with the request.\n\n\
         Best regards,\nThe ReuseLa Team\n",
        owner = input.owner_name,
        title = input.item_title,
        name = input.requester_name,
        email = input.requester_email,
        contact = input.preferred_contact,
        message = input.message,
    );
    (subject, body)
}

pub struct RequesterDecision<'a> {
    pub requester_name: &'a str,
    pub item_title: &'a str,
    pub owner_name: &'a str,
    pub owner_email: &'a str,
    pub owner_phone: &'a str,
    pub location: &'a str,
    pub original_message: &'a str,
}

/// Email to the requester when their request is approved.
///
/// This is the only message that discloses the owner's contact details.
pub fn requester_approved(input: &RequesterDecision<'_>) -> (String, String) {
    let subject = "Your request has been approved!".to_string();
    let location = if input.location.trim().is_empty() {
        "Contact owner for details"
    } else {
        input.location
    };
    let body = format!(
        "Hi {name},\n\n\
         Great news! Your request for \"{title}\" has been approved!\n\n\
         Item Details:\n\
         - Item: {title}\n\
         - Owner: {owner}\n\
         - Location: {location}\n\n\
         Contact Information:\n\
         - Email: {owner_email}\n\
         - Phone: {owner_phone}\n\n\
         Your Original Message:\n\"{message}\"\n\n\
         Next Steps:\n\
         1. Contact the item owner using the information above\n\
         2. Arrange a time and place to collect the item\n\
         3. Meet up and collect your item\n\
         4. The owner will mark the request as \"Completed\" once you've collected it\n\n\
         Thank you for using ReuseLa to give items a second life!\n\n\
         Best regards,\nThe ReuseLa Team\n",
        name = input.requester_name,
        title = input.item_title,
        owner = input.owner_name,
        location = location,
        owner_email = input.owner_email,
        owner_phone = input.owner_phone,
        message = input.original_message,
    );
    (subject, body)
}

/// Email to the requester when their request is declined
pub fn requester_rejected(input: &RequesterDecision<'_>) -> (String, String) {
    let subject = "Update on your request".to_string();
    let body = format!(
        "Hi {name},\n\n\
         We wanted to let you know that your request for \"{title}\" has been \
         declined by the item owner.\n\n\
         Item Details:\n\
         - Item: {title}\n\
         - Owner: {owner}\n\n\
         Your Original Message:\n\"{message}\"\n\n\
         Don't worry! There are plenty of other items available on ReuseLa.\n\
         Feel free to browse our platform for other items that might interest you.\n\n\
         Thank you for using ReuseLa to give items a second life!\n\n\
         Best regards,\nThe ReuseLa Team\n",
        name = input.requester_name,
        title = input.item_title,
        owner = input.owner_name,
        message = input.original_message,
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision_input() -> RequesterDecision<'static> {
        RequesterDecision {
            requester_name: "Aisha",
            item_title: "IKEA bookshelf",
            owner_name: "Ben",
            owner_email: "ben@example.com",
            owner_phone: "0123456789",
            location: "Petaling Jaya 47300",
            original_message: "I can pick it up this weekend.",
        }
    }

    #[test]
    fn approval_email_contains_owner_contact_details() {
        let (subject, body) = requester_approved(&decision_input());
        assert_eq!(subject, "Your request has been approved!");
        assert!(body.contains("ben@example.com"));
        assert!(body.contains("0123456789"));
        assert!(body.contains("Petaling Jaya 47300"));
        assert!(body.contains("I can pick it up this weekend."));
    }

    #[test]
    fn approval_email_falls_back_when_location_empty() {
        let mut input = decision_input();
        input.location = "  ";
        let (_, body) = requester_approved(&input);
        assert!(body.contains("Contact owner for details"));
    }

    #[test]
    fn rejection_email_never_discloses_owner_contact() {
        let (subject, body) = requester_rejected(&decision_input());
        assert_eq!(subject, "Update on your request");
        assert!(!body.contains("ben@example.com"));
        assert!(!body.contains("0123456789"));
    }

    #[test]
    fn owner_email_includes_requester_and_message() {
        let (subject, body) = owner_new_request(&OwnerNewRequest {
            owner_name: "Ben",
            item_title: "IKEA bookshelf",
            requester_name: "Aisha",
            requester_email: "aisha@example.com",
            message: "Is this still available?",
            preferred_contact: "email",
        });
        assert_eq!(subject, "New request for your item on ReuseLa");
        assert!(body.contains("aisha@example.com"));
        assert!(body.contains("Is this still available?"));
    }
}
