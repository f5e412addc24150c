use serde::Serialize;

/// Renderable payment form redirecting the payer to the hosted checkout page
///
/// The form always submits with GET. With `auto_redirect` the submit button
/// is hidden and the form submits itself on page load; otherwise the payer
/// clicks "Pay Now".
#[derive(Debug, Clone, Serialize)]
pub struct PaymentForm {
    pub action_url: String,
    pub auto_redirect: bool,
}

impl PaymentForm {
    pub fn new(action_url: String, auto_redirect: bool) -> Self {
        Self {
            action_url,
            auto_redirect,
        }
    }

    /// Render the HTML fragment the host embeds on the invoice page
    pub fn render(&self) -> String {
        let mut form = String::new();
        form.push_str(&format!(
            "<form name=\"payment_form\" action=\"{}\" method=\"get\">\n",
            self.action_url
        ));
        form.push_str(
            "<input class=\"bb-button bb-button-submit\" type=\"submit\" value=\"Pay Now\" id=\"payment_button\"/>\n",
        );
        form.push_str("</form>\n\n");

        if self.auto_redirect {
            form.push_str("<h2>Redirecting to Payment Page...</h2>");
            form.push_str(
                "<script type='text/javascript'>$(document).ready(function(){    document.getElementById('payment_button').style.display = 'none';    document.forms['payment_form'].submit();});</script>",
            );
        }

        form
    }
}
