//! Keyword tables for MySQL and MariaDB, one phrase per line.

pub(crate) const MYSQL_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ALTER COLUMN
ALTER TABLE
DELETE FROM
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
LIMIT
ORDER BY
REPLACE INTO
SELECT
SET
UPDATE
VALUES
WHERE
";

pub(crate) const MYSQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS: &str = "INTERSECT
UNION
UNION ALL
UNION DISTINCT
";

pub(crate) const MYSQL_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS JOIN
ELSE
INNER JOIN
JOIN
LEFT JOIN
LEFT OUTER JOIN
NATURAL JOIN
OR
RIGHT JOIN
RIGHT OUTER JOIN
STRAIGHT_JOIN
WHEN
XOR
";

pub(crate) const MYSQL_RESERVED_KEYWORDS: &str = "ALL
AS
ASC
AUTO_INCREMENT
BETWEEN
BINARY
BOTH
BY
CASCADE
CHANGE
CHARACTER SET
CHARSET
COLLATE
COLUMN
CONSTRAINT
CREATE
DATABASE
DEFAULT
DELAYED
DELETE
DESC
DESCRIBE
DISTINCT
DISTINCTROW
DIV
DROP
ENGINE
ESCAPE
EXISTS
EXPLAIN
FALSE
FOR
FORCE
FOREIGN KEY
FULLTEXT
GRANT
HIGH_PRIORITY
IF
IGNORE
IN
INDEX
INTERVAL
INTO
IS
KEY
LEADING
LIKE
LOCK
LOW_PRIORITY
MATCH
MOD
NOT
NULL
ON DELETE
ON UPDATE
ON
OFFSET
ONLY
ORDER
OVER
PARTITION BY
PRIMARY KEY
REFERENCES
REGEXP
RENAME
REPLACE
RESTRICT
REVOKE
RLIKE
ROW
ROWS
SEPARATOR
SHOW
SQL_BIG_RESULT
SQL_BUFFER_RESULT
SQL_CACHE
SQL_CALC_FOUND_ROWS
SQL_NO_CACHE
SQL_SMALL_RESULT
STRAIGHT_JOIN
TABLE
THEN
TO
TRAILING
TRUE
UNIQUE
UNSIGNED
USE
USING
VIEW
WITH
ZEROFILL
";
