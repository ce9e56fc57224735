// HTML templates for the two emails sent per contact form submission

use crate::domain::ContactForm;
use crate::email::mailer::EmailMessage;
use chrono::{DateTime, Utc};

const COMPANY_PHONE: &str = "+91 9988135799";
const COMPANY_EMAIL: &str = "hello@pitchzy.com";

/// Notification sent to the admin mailbox for each submission
pub fn admin_notification(
    form: &ContactForm,
    submitted_at: DateTime<Utc>,
    admin: &str,
) -> EmailMessage {
    let name = escape_html(&form.name);
    let email = escape_html(&form.email);
    let phone = escape_html(&form.phone);
    let message = escape_html(&form.message);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; border-radius: 10px;">
  <div style="text-align: center; margin-bottom: 30px;">
    <h1 style="color: #2563eb; margin: 0;">pitchZY</h1>
    <h2 style="color: #374151; margin: 10px 0;">New Contact Form Submission</h2>
  </div>
  <div style="background: #f9fafb; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
    <h3 style="color: #374151; margin-top: 0;">Contact Details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Submitted:</strong> {submitted}</p>
  </div>
  <div style="background: #ffffff; padding: 20px; border: 1px solid #e5e7eb; border-radius: 8px;">
    <h3 style="color: #374151; margin-top: 0;">Message:</h3>
    <p style="line-height: 1.6; color: #4b5563;">{message}</p>
  </div>
  <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb; text-align: center; color: #6b7280;">
    <p>This message was sent through the pitchZY contact form.</p>
    <p>Please respond to the customer at: <a href="mailto:{email}" style="color: #2563eb;">{email}</a></p>
  </div>
</div>"#,
        submitted = submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    EmailMessage {
        to: admin.to_string(),
        subject: format!("New Contact Form Submission from {}", form.name),
        html,
    }
}

/// Confirmation sent back to the submitter
pub fn user_confirmation(form: &ContactForm) -> EmailMessage {
    let name = escape_html(&form.name);
    let message = escape_html(&form.message);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; border-radius: 10px;">
  <div style="text-align: center; margin-bottom: 30px;">
    <h1 style="color: #2563eb; margin: 0;">pitchZY</h1>
    <h2 style="color: #374151; margin: 10px 0;">Thank You for Contacting Us!</h2>
  </div>
  <div style="background: #f0f9ff; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
    <p style="margin: 0; color: #374151;">Dear {name},</p>
    <p style="color: #4b5563; line-height: 1.6;">
      Thank you for reaching out to pitchZY! We have received your message and will get back to you within 24 hours.
    </p>
  </div>
  <div style="background: #ffffff; padding: 20px; border: 1px solid #e5e7eb; border-radius: 8px;">
    <h3 style="color: #374151; margin-top: 0;">Your Message:</h3>
    <p style="line-height: 1.6; color: #4b5563; font-style: italic;">"{message}"</p>
  </div>
  <div style="margin-top: 30px; padding: 20px; background: #2563eb; border-radius: 8px; text-align: center;">
    <p style="color: white; margin: 0; font-weight: bold;">Need immediate assistance?</p>
    <p style="color: #bfdbfe; margin: 10px 0;">Call us at: {phone}</p>
    <p style="color: #bfdbfe; margin: 0;">Email us at: {email}</p>
  </div>
  <div style="margin-top: 20px; text-align: center; color: #6b7280;">
    <p>Best regards,<br>The pitchZY Team</p>
  </div>
</div>"#,
        phone = COMPANY_PHONE,
        email = COMPANY_EMAIL,
    );

    EmailMessage {
        to: form.email.clone(),
        subject: "Thank you for contacting pitchZY!".to_string(),
        html,
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+14155550100".to_string(),
            message: "I would like to learn more about the platform.".to_string(),
        }
    }

    #[test]
    fn admin_notification_addresses_admin_and_quotes_submitter() {
        let message = admin_notification(&form(), Utc::now(), "hello@pitchzy.com");

        assert_eq!(message.to, "hello@pitchzy.com");
        assert_eq!(
            message.subject,
            "New Contact Form Submission from Ada Lovelace"
        );
        assert!(message.html.contains("Ada Lovelace"));
        assert!(message.html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn user_confirmation_addresses_submitter() {
        let message = user_confirmation(&form());

        assert_eq!(message.to, "ada@example.com");
        assert_eq!(message.subject, "Thank you for contacting pitchZY!");
        assert!(message.html.contains("Dear Ada Lovelace"));
        assert!(message
            .html
            .contains("I would like to learn more about the platform."));
        assert!(message.html.contains(COMPANY_PHONE));
    }

    #[test]
    fn templates_escape_user_supplied_html() {
        let mut form = form();
        form.name = "<script>alert(1)</script>".to_string();
        form.message = "Hello <b>there</b> & goodbye".to_string();

        let message = user_confirmation(&form);
        assert!(!message.html.contains("<script>"));
        assert!(message.html.contains("&lt;script&gt;"));
        assert!(message.html.contains("Hello &lt;b&gt;there&lt;/b&gt; &amp; goodbye"));
    }
}
