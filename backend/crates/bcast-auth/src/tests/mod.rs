mod webhook_secret;
