use assert_cmd::Command;
use predicates::prelude::*;

fn bot() -> Command {
    Command::cargo_bin("contact-bot").unwrap()
}

#[test]
fn add_then_lookup() {
    bot()
        .write_stdin("add Alice 123-456-7890\nphone alice\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Alice's phone is 123-456-7890"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn duplicate_add_warns_without_overwriting() {
    bot()
        .write_stdin("add Bob 1234567890\nadd bob 0987654321\nphone Bob\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "User 'Bob' already exists with phone 1234567890.",
        ))
        .stdout(predicate::str::contains("Use 'change Bob <new_phone>'"))
        // Original phone survives the duplicate add
        .stdout(predicate::str::contains("Bob's phone is 1234567890"));
}

#[test]
fn invalid_phone_is_reported_with_the_input() {
    bot()
        .write_stdin("add Alice 123\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone '123' is not matching valid format. Should be digits only, 10 to 15 length.",
        ));
}

#[test]
fn missing_arguments_show_the_add_usage_hint() {
    bot()
        .write_stdin("add Alice\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Give me name and phone please."))
        .stdout(predicate::str::contains(
            "'add <username> <phone number>' to add user with it's phone.",
        ));
}

#[test]
fn punctuated_phones_are_accepted_and_kept_verbatim() {
    bot()
        .write_stdin("add Dana +38 (050) 123-45-67\nexit\n")
        .assert()
        .success()
        // '+38', '(050)' etc. are separate tokens, so only 2-arg forms work;
        // a single punctuated token is the supported shape
        .stdout(predicate::str::contains("Give me name and phone please."));

    bot()
        .write_stdin("add Dana +380501234567\nphone dana\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana's phone is +380501234567"));
}
