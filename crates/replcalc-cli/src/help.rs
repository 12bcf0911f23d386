//! Static help text for the `help` command.

/// Help block printed for the `help` command.
///
/// The text, indentation included, is part of the console contract;
/// tests assert on it verbatim. The session loop prints it followed by
/// a newline.
pub const HELP_TEXT: &str = "
    REPL Calculator Help
    --------------------

    Operations:
        <number1> <operator> <number2>
        - Perform a calculation with a supported operator and two numbers.

        Supported Operations:
        +   : Adds two operands.
        -   : Subtracts the second operand from the first.
        *   : Multiplies two operands.
        /   : Divide first operand by the second.
        **  : First operand to the power of the second.
        %   : Remainder of first operand divided by second.

    Special Commands:
        help    : Displays this help message.
        history : Shows the history of calculations.
        exit    : Exits the calculator.

    Examples:
        3 + 3
        5 - 2
        3 * 4
        4 / 2
        2 ** 2
        8 % 2
    ";
