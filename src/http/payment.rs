//! Mock payment form embedded by the UI in an iframe.
//!
//! Nothing is submitted to the server. Once every field is filled in and the
//! terms box is ticked, the page posts `PAYMENT_SUCCESS` to its parent frame.

use axum::response::Html;

/// Message posted to `window.parent` on a completed form.
pub const PAYMENT_SUCCESS_MESSAGE: &str = "PAYMENT_SUCCESS";

const PAYMENT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Secure Payment</title>
  <style>
    body { font-family: sans-serif; padding: 20px; background: #f9f9f9; }
    .box { background: white; padding: 20px; border: 1px solid #ccc; border-radius: 5px; }
    button { background: #007bff; color: white; border: none; padding: 10px 20px; cursor: pointer; width: 100%; margin-top: 10px; }
    button:disabled { background: #ccc; cursor: not-allowed; }
    .form-group { margin-bottom: 15px; }
    label { display: block; font-weight: bold; margin-bottom: 5px; font-size: 14px; }
    input[type="text"], input[type="password"] { padding: 8px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
    .card-inputs { display: flex; gap: 5px; }
    .card-inputs input { width: 25%; text-align: center; }
    .row { display: flex; gap: 15px; }
    .col { flex: 1; }
  </style>
</head>
<body>
  <div class="box">
    <h3>Payment Info</h3>
    <hr/>

    <div class="form-group">
      <label><input type="radio" name="pay_method" value="card" checked> Credit Card</label>
      <label><input type="radio" name="pay_method" value="bank"> Bank Transfer</label>
    </div>

    <div class="form-group">
      <label for="input-name">Name</label>
      <input type="text" id="input-name" placeholder="Jane Doe" style="width: 100%;">
    </div>

    <div class="form-group">
      <label for="input-phone">Phone</label>
      <input type="text" id="input-phone" placeholder="010-1234-5678" style="width: 100%;">
    </div>

    <div class="form-group">
      <label>Card Number</label>
      <div class="card-inputs">
        <input type="text" id="input-card-1" maxlength="4" placeholder="0000">
        <input type="text" id="input-card-2" maxlength="4" placeholder="0000">
        <input type="text" id="input-card-3" maxlength="4" placeholder="0000">
        <input type="text" id="input-card-4" maxlength="4" placeholder="0000">
      </div>
    </div>

    <div class="row">
      <div class="col form-group">
        <label for="input-cvc">CVC (3 digits)</label>
        <input type="password" id="input-cvc" maxlength="3" placeholder="***" style="width: 100%;">
      </div>
      <div class="col form-group">
        <label for="input-pwd">First 2 PIN digits</label>
        <input type="password" id="input-pwd" maxlength="2" placeholder="**" style="width: 100%;">
      </div>
    </div>

    <hr/>

    <label style="font-weight: normal; font-size: 14px;">
      <input type="checkbox" id="chk_agree" onchange="toggleButton()">
      (Required) I agree to the payment terms.
    </label>
    <br/>

    <button id="btn_pay" disabled onclick="processPayment()">Pay</button>
  </div>

  <script>
    function toggleButton() {
      const agree = document.getElementById('chk_agree').checked;
      document.getElementById('btn_pay').disabled = !agree;
    }

    function processPayment() {
      const ids = ['input-name', 'input-phone', 'input-card-1', 'input-card-2', 'input-card-3', 'input-card-4', 'input-cvc', 'input-pwd'];
      for (const id of ids) {
        const field = document.getElementById(id);
        if (!field.value) {
          alert('Please fill all fields');
          field.focus();
          return;
        }
      }
      window.parent.postMessage('PAYMENT_SUCCESS', '*');
    }
  </script>
</body>
</html>
"#;

/// `/payment`, any method.
pub async fn payment_page() -> Html<&'static str> {
    Html(PAYMENT_PAGE)
}
